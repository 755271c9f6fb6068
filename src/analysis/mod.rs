/*!
 * Vocabulary analysis pipeline.
 *
 * This module contains the core functionality for analyzing the vocabulary a
 * student used during a lesson. It is split into several submodules:
 *
 * - `core`: Analysis service and result types
 * - `filter`: Token exclusion rules
 * - `normalizer`: Spelling correction and lemmatization per word
 * - `report`: User-facing report assembly
 */

// Re-export main types for easier usage
pub use self::core::{AnalysisResult, VocabularyAnalysis, VocabularyAnalyzer};
pub use self::filter::TokenFilter;
pub use self::normalizer::WordNormalizer;
pub use self::report::{LessonReport, ReportSummary, SpeechStats, VocabularyBreakdown};

// Submodules
pub mod core;
pub mod filter;
pub mod normalizer;
pub mod report;
