/*!
 * User-facing lesson report assembly.
 *
 * Maps an analysis outcome into the serializable report handed to callers,
 * adding the derived percentage of words outside the book and optional
 * speech statistics from the structured transcript parse.
 */

use serde::Serialize;

use crate::analysis::core::{AnalysisResult, VocabularyAnalysis};
use crate::transcript::{Speaker, Transcript, TranscriptEntry};

/// Message reported when segmentation finds no student speech
pub const NO_STUDENT_SPEECH_ERROR: &str = "No student speech found in transcript";

/// Aggregated counts for one lesson
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportSummary {
    /// Number of distinct meaningful words the student used
    pub total_meaningful_words: usize,

    /// Number of distinct words in the vocabulary list
    pub unique_words_count: usize,

    /// Number of student words absent from the book
    pub words_outside_book: usize,

    /// Share of student words absent from the book, rounded to 2 decimals
    pub percentage_outside_book: f64,
}

/// Word lists for one lesson
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VocabularyBreakdown {
    /// All meaningful student words, sorted
    pub all_words_used: Vec<String>,

    /// Student words absent from the book, sorted
    pub words_not_in_book: Vec<String>,
}

/// Speaking statistics from the structured transcript parse
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpeechStats {
    /// Number of student turns
    pub student_turns: usize,

    /// Number of teacher turns
    pub teacher_turns: usize,

    /// Total student speaking time, SRT formatted
    pub student_speaking_time: String,
}

impl SpeechStats {
    /// Derive speaking statistics from a parsed transcript
    pub fn from_transcript(transcript: &Transcript) -> Self {
        Self {
            student_turns: transcript.turn_count(Speaker::Student),
            teacher_turns: transcript.turn_count(Speaker::Teacher),
            student_speaking_time: TranscriptEntry::format_timestamp(
                transcript.speaking_time_ms(Speaker::Student),
            ),
        }
    }
}

/// Serializable lesson analysis report
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LessonReport {
    /// Aggregated counts
    pub summary: ReportSummary,

    /// Word lists
    pub vocabulary_breakdown: VocabularyBreakdown,

    /// Speaking statistics, when the transcript parsed as timed blocks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech: Option<SpeechStats>,

    /// Error marker, set when no student speech was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LessonReport {
    /// Build the report for a completed analysis
    pub fn from_analysis(analysis: &VocabularyAnalysis) -> Self {
        Self {
            summary: ReportSummary {
                total_meaningful_words: analysis.total_meaningful_words,
                unique_words_count: analysis.vocabulary_list.len(),
                words_outside_book: analysis.unique_words_outside_book,
                percentage_outside_book: percentage(
                    analysis.unique_words_outside_book,
                    analysis.total_meaningful_words,
                ),
            },
            vocabulary_breakdown: VocabularyBreakdown {
                all_words_used: analysis.vocabulary_list.clone(),
                words_not_in_book: analysis.outside_book_list.clone(),
            },
            speech: None,
            error: None,
        }
    }

    /// Build the zeroed error-shaped report for a no-speech outcome
    pub fn no_student_speech() -> Self {
        Self {
            summary: ReportSummary {
                total_meaningful_words: 0,
                unique_words_count: 0,
                words_outside_book: 0,
                percentage_outside_book: 0.0,
            },
            vocabulary_breakdown: VocabularyBreakdown {
                all_words_used: Vec::new(),
                words_not_in_book: Vec::new(),
            },
            speech: None,
            error: Some(NO_STUDENT_SPEECH_ERROR.to_string()),
        }
    }

    /// Build the report for any analysis outcome
    pub fn from_result(result: &AnalysisResult) -> Self {
        match result {
            AnalysisResult::Analyzed(analysis) => Self::from_analysis(analysis),
            AnalysisResult::NoStudentSpeech => Self::no_student_speech(),
        }
    }

    /// Attach speaking statistics to the report
    pub fn with_speech_stats(mut self, stats: SpeechStats) -> Self {
        self.speech = Some(stats);
        self
    }

    /// Whether the report carries the no-speech error marker
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Share of `part` in `total` as a percentage rounded to 2 decimals
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 100.0 * 100.0).round() / 100.0
}
