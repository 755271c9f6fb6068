/*!
 * End-to-end lesson analysis tests over the built-in English model
 */

use std::sync::Arc;

use vocascope::analysis::VocabularyAnalyzer;
use vocascope::app_config::Config;
use vocascope::app_controller::Controller;
use vocascope::spelling::SpellingDictionary;
use vocascope::tagger::{LanguageModel, LexiconModel};
use crate::common;

fn analyzer_without_dictionary() -> VocabularyAnalyzer {
    VocabularyAnalyzer::with_defaults(
        Arc::new(LexiconModel::new()),
        Arc::new(SpellingDictionary::empty()),
    )
}

/// Test the canonical example: one student sentence against a short book
#[test]
fn test_analyzeVocabulary_withExampleLesson_shouldMatchExpectedSets() {
    let transcript = "1\n\
00:00:01,000 --> 00:00:03,000\n\
[S]: I really enjoy reading books.\n\
2\n\
00:00:04,000 --> 00:00:06,000\n\
[T]: Good job.\n";
    let book_text = "Reading is fun.";

    let analyzer = analyzer_without_dictionary();
    let result = analyzer.analyze_vocabulary(transcript, book_text).unwrap();
    let analysis = result.analysis().expect("student speech should be found");

    // "I" drops as a pronoun stop word, the rest lemmatize to base forms
    assert_eq!(analysis.vocabulary_list, vec!["book", "enjoy", "read", "really"]);
    assert_eq!(analysis.total_meaningful_words, 4);

    // Book vocabulary is {fun, read}, so "read" is the only overlap
    assert_eq!(analysis.outside_book_list, vec!["book", "enjoy", "really"]);
    assert_eq!(analysis.unique_words_outside_book, 3);
}

/// Test the set-difference invariant holds on a larger lesson
#[test]
fn test_analyzeVocabulary_withSampleTranscript_shouldKeepInvariants() {
    let analyzer = analyzer_without_dictionary();
    let result = analyzer
        .analyze_vocabulary(common::SAMPLE_TRANSCRIPT, "The students enjoy reading stories.")
        .unwrap();
    let analysis = result.analysis().unwrap();

    assert_eq!(analysis.total_meaningful_words, analysis.vocabulary_list.len());
    assert_eq!(analysis.unique_words_outside_book, analysis.outside_book_list.len());

    let mut sorted = analysis.vocabulary_list.clone();
    sorted.sort();
    assert_eq!(analysis.vocabulary_list, sorted);

    for word in &analysis.outside_book_list {
        assert!(analysis.vocabulary_list.contains(word));
    }
}

/// Test normalization is idempotent for base forms the dictionary knows
#[test]
fn test_normalization_withNormalizedWords_shouldBeIdempotent() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dict_path = common::create_test_dictionary(&temp_dir.path().to_path_buf(), "dict.txt").unwrap();

    let dictionary =
        Arc::new(SpellingDictionary::from_file(&dict_path, 2, 0, 1).unwrap());
    let analyzer = VocabularyAnalyzer::with_defaults(Arc::new(LexiconModel::new()), dictionary);

    let words = analyzer
        .extract_meaningful_words("I really enjoy reading books about the library")
        .unwrap();

    for word in &words {
        let renormalized = analyzer.extract_meaningful_words(word).unwrap();
        assert!(
            renormalized.contains(word),
            "'{}' should normalize to itself",
            word
        );
    }
}

/// Test spelling correction feeds lemmatization
#[test]
fn test_analyzeVocabulary_withMisspelledStudentWords_shouldCorrectThem() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dict_path = common::create_test_dictionary(&temp_dir.path().to_path_buf(), "dict.txt").unwrap();

    let analyzer = VocabularyAnalyzer::with_defaults(
        Arc::new(LexiconModel::new()),
        Arc::new(SpellingDictionary::from_file(&dict_path, 2, 0, 1).unwrap()),
    );

    let result = analyzer
        .analyze_vocabulary("[S]: I realy enjoi raeding boks.", "")
        .unwrap();
    let analysis = result.analysis().unwrap();

    assert_eq!(analysis.vocabulary_list, vec!["book", "enjoy", "read", "really"]);
}

/// Test the lexicon model parses text deterministically across calls
#[test]
fn test_lexiconModel_withSameInput_shouldBeDeterministic() {
    let model = LexiconModel::new();
    let text = "i really enjoy reading books about 42 things on www.example.com";

    let first = model.parse(text).unwrap();
    let second = model.parse(text).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.text, b.text);
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.dep, b.dep);
    }
}

/// Test the controller end to end over files on disk
#[test]
fn test_controller_run_withLessonFiles_shouldProduceReport() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();

    let transcript_path = common::create_test_transcript(&dir, "lesson.srt").unwrap();
    let book_path =
        common::create_test_file(&dir, "book.txt", "The students enjoy reading stories.").unwrap();

    let controller = Controller::new_for_test().unwrap();
    assert!(controller.is_initialized());

    let report = controller.run(&transcript_path, &book_path).unwrap();

    assert!(!report.is_error());
    assert!(report.summary.total_meaningful_words > 0);
    assert!(report.vocabulary_breakdown.all_words_used.contains(&"book".to_string()));

    // Speech statistics come from the timed transcript blocks
    let speech = report.speech.expect("speech stats should be present");
    assert_eq!(speech.student_turns, 2);
    assert_eq!(speech.teacher_turns, 2);
}

/// Test the controller surfaces the error-shaped report for teacher-only lessons
#[test]
fn test_controller_run_withTeacherOnlyLesson_shouldReportError() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();

    let transcript_path =
        common::create_test_file(&dir, "lesson.srt", common::TEACHER_ONLY_TRANSCRIPT).unwrap();
    let book_path = common::create_test_file(&dir, "book.txt", "Reading is fun.").unwrap();

    let controller = Controller::new_for_test().unwrap();
    let report = controller.run(&transcript_path, &book_path).unwrap();

    assert!(report.is_error());
    assert_eq!(report.summary.total_meaningful_words, 0);
    assert!(report.vocabulary_breakdown.all_words_used.is_empty());
}

/// Test report rendering produces valid JSON
#[test]
fn test_controller_renderReport_shouldEmitJson() {
    let controller = Controller::new_for_test().unwrap();
    let report = controller
        .analyze_texts("[S]: I really enjoy reading books.", "Reading is fun.")
        .unwrap();

    let rendered = Controller::render_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert!(value.get("summary").is_some());
    assert!(value.get("vocabulary_breakdown").is_some());
}

/// Test a config with a missing dictionary file fails controller construction
#[test]
fn test_controller_withMissingDictionary_shouldFail() {
    let mut config = Config::default();
    config.spelling.dictionary_path = Some("/nonexistent/frequency_en.txt".into());

    assert!(Controller::with_config(config).is_err());
}
