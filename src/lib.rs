/*!
 * # vocascope - Student Vocabulary Analyzer
 *
 * A Rust library for analyzing the vocabulary a student used during a lesson.
 *
 * ## Features
 *
 * - Segment student speech out of [T]:/[S]: tagged SRT-style transcripts
 * - Filter tokens down to meaningful words using part-of-speech, dependency,
 *   stop-word, and shape signals
 * - Normalize words with spelling correction and lemmatization
 * - Report the student vocabulary and the words outside a reference book
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `transcript`: Transcript parsing and student speech segmentation
 * - `analysis`: Vocabulary analysis pipeline:
 *   - `analysis::core`: Analysis service and result types
 *   - `analysis::filter`: Token exclusion rules
 *   - `analysis::normalizer`: Spelling correction and lemmatization
 *   - `analysis::report`: User-facing report assembly
 * - `tagger`: Linguistic model implementations:
 *   - `tagger::lexicon`: Built-in English model
 *   - `tagger::mock`: Scripted model for tests
 * - `spelling`: SymSpell-backed spelling dictionary
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod analysis;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod spelling;
pub mod tagger;
pub mod transcript;

// Re-export main types for easier usage
pub use analysis::{AnalysisResult, LessonReport, VocabularyAnalysis, VocabularyAnalyzer};
pub use app_config::Config;
pub use errors::{AnalysisError, AppError, DictionaryError, ModelError};
pub use spelling::SpellingDictionary;
pub use tagger::{LanguageModel, LexiconModel, MockModel, Token};
pub use transcript::{extract_student_speech, Speaker, Transcript, TranscriptEntry};
