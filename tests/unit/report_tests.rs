/*!
 * Tests for lesson report assembly
 */

use vocascope::analysis::report::{LessonReport, SpeechStats, NO_STUDENT_SPEECH_ERROR};
use vocascope::analysis::{AnalysisResult, VocabularyAnalysis};
use vocascope::transcript::Transcript;
use crate::common;

fn sample_analysis() -> VocabularyAnalysis {
    VocabularyAnalysis {
        total_meaningful_words: 3,
        unique_words_outside_book: 1,
        vocabulary_list: vec!["book".to_string(), "enjoy".to_string(), "read".to_string()],
        outside_book_list: vec!["enjoy".to_string()],
    }
}

/// Test report assembly from a completed analysis
#[test]
fn test_fromResult_withAnalyzedOutcome_shouldCarryWordLists() {
    let result = AnalysisResult::Analyzed(sample_analysis());
    let report = LessonReport::from_result(&result);

    assert_eq!(report.summary.total_meaningful_words, 3);
    assert_eq!(report.summary.words_outside_book, 1);
    assert_eq!(report.summary.percentage_outside_book, 33.33);
    assert_eq!(
        report.vocabulary_breakdown.all_words_used,
        vec!["book", "enjoy", "read"]
    );
    assert_eq!(report.vocabulary_breakdown.words_not_in_book, vec!["enjoy"]);
    assert!(!report.is_error());
}

/// Test report assembly from a no-speech outcome
#[test]
fn test_fromResult_withNoStudentSpeech_shouldBeErrorShaped() {
    let report = LessonReport::from_result(&AnalysisResult::NoStudentSpeech);

    assert!(report.is_error());
    assert_eq!(report.error.as_deref(), Some(NO_STUDENT_SPEECH_ERROR));
    assert_eq!(report.summary.total_meaningful_words, 0);
    assert_eq!(report.summary.percentage_outside_book, 0.0);
}

/// Test speech statistics derived from a parsed transcript
#[test]
fn test_speechStats_fromTranscript_shouldCountTurnsAndTime() {
    let transcript = Transcript::parse(common::SAMPLE_TRANSCRIPT).unwrap();
    let stats = SpeechStats::from_transcript(&transcript);

    assert_eq!(stats.student_turns, 2);
    assert_eq!(stats.teacher_turns, 2);
    assert_eq!(stats.student_speaking_time, "00:00:08,000");
}

/// Test speech statistics serialize inside the report
#[test]
fn test_report_withSpeechStats_shouldSerializeSection() {
    let transcript = Transcript::parse(common::SAMPLE_TRANSCRIPT).unwrap();
    let report = LessonReport::from_analysis(&sample_analysis())
        .with_speech_stats(SpeechStats::from_transcript(&transcript));

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"speech\""));
    assert!(json.contains("\"student_turns\":2"));
}
