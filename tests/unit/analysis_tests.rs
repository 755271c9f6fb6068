/*!
 * Tests for the vocabulary analysis pipeline using scripted models
 */

use std::sync::Arc;

use vocascope::analysis::{AnalysisResult, VocabularyAnalyzer};
use vocascope::spelling::SpellingDictionary;
use vocascope::tagger::mock::{stop_token, token, token_with};
use vocascope::tagger::{DepLabel, MockModel, PosTag};

fn analyzer_with(model: MockModel) -> VocabularyAnalyzer {
    VocabularyAnalyzer::with_defaults(Arc::new(model), Arc::new(SpellingDictionary::empty()))
}

/// Test the empty-speech contract: teacher-only transcripts produce the
/// error-shaped result
#[test]
fn test_analyzeVocabulary_withTeacherOnlyTranscript_shouldReturnNoStudentSpeech() {
    let analyzer = analyzer_with(MockModel::working());

    let result = analyzer
        .analyze_vocabulary("1\n00:00:01,000 --> 00:00:03,000\n[T]: Good job.\n", "book text")
        .unwrap();

    assert_eq!(result, AnalysisResult::NoStudentSpeech);
    assert!(result.analysis().is_none());
}

/// Test the set-difference invariant over the analyzed word sets
#[test]
fn test_analyzeVocabulary_withSharedWords_shouldSubtractBookVocabulary() {
    let analyzer = analyzer_with(MockModel::working());

    let result = analyzer
        .analyze_vocabulary("[S]: gamma alpha beta", "beta delta")
        .unwrap();

    let analysis = result.analysis().unwrap();

    // Sorted lexicographically
    assert_eq!(analysis.vocabulary_list, vec!["alpha", "beta", "gamma"]);
    assert_eq!(analysis.outside_book_list, vec!["alpha", "gamma"]);
    assert_eq!(analysis.total_meaningful_words, 3);
    assert_eq!(analysis.unique_words_outside_book, 2);

    // Every outside-book word is part of the vocabulary
    for word in &analysis.outside_book_list {
        assert!(analysis.vocabulary_list.contains(word));
    }
}

/// Test duplicate surface forms collapse into one vocabulary entry
#[test]
fn test_analyzeVocabulary_withRepeatedWords_shouldCollapseDuplicates() {
    let analyzer = analyzer_with(MockModel::working());

    let result = analyzer
        .analyze_vocabulary("[S]: alpha alpha alpha beta", "")
        .unwrap();

    let analysis = result.analysis().unwrap();
    assert_eq!(analysis.vocabulary_list, vec!["alpha", "beta"]);
    assert_eq!(analysis.total_meaningful_words, 2);
}

/// Test excluded part-of-speech tags never reach the vocabulary
#[test]
fn test_analyzeVocabulary_withFunctionWords_shouldExcludeThem() {
    let model = MockModel::working()
        .with_token(token_with("the", PosTag::Det, DepLabel::Det))
        .with_token(token_with("under", PosTag::Adp, DepLabel::Case))
        .with_token(token_with("and", PosTag::Cconj, DepLabel::Cc))
        .with_token(token_with("because", PosTag::Sconj, DepLabel::Mark));
    let analyzer = analyzer_with(model);

    let result = analyzer
        .analyze_vocabulary("[S]: the alpha under and because beta", "")
        .unwrap();

    let analysis = result.analysis().unwrap();
    assert_eq!(analysis.vocabulary_list, vec!["alpha", "beta"]);
}

/// Test proper nouns and stop words are excluded
#[test]
fn test_analyzeVocabulary_withProperNounsAndStopWords_shouldExcludeThem() {
    let model = MockModel::working()
        .with_token(token_with("london", PosTag::Propn, DepLabel::Dep))
        .with_token(stop_token("very", PosTag::Adv));
    let analyzer = analyzer_with(model);

    let result = analyzer
        .analyze_vocabulary("[S]: london very alpha", "")
        .unwrap();

    let analysis = result.analysis().unwrap();
    assert_eq!(analysis.vocabulary_list, vec!["alpha"]);
}

/// Test normalized words at or below two characters are discarded
#[test]
fn test_extractMeaningfulWords_withShortNormalizedForms_shouldDiscard() {
    let model = MockModel::working().with_lemma("going", "go");
    let analyzer = analyzer_with(model);

    let words = analyzer.extract_meaningful_words("going alpha ab").unwrap();

    assert!(words.contains("alpha"));
    assert!(!words.contains("go"));
    assert!(!words.contains("ab"));
}

/// Test scripted lemmas flow through to the vocabulary
#[test]
fn test_extractMeaningfulWords_withScriptedLemmas_shouldNormalize() {
    let model = MockModel::working()
        .with_lemma("reading", "read")
        .with_lemma("books", "book");
    let analyzer = analyzer_with(model);

    let words = analyzer.extract_meaningful_words("reading books").unwrap();

    assert!(words.contains("read"));
    assert!(words.contains("book"));
    assert!(!words.contains("reading"));
}

/// Test model faults propagate as errors, distinct from the no-speech case
#[test]
fn test_analyzeVocabulary_withFailingModel_shouldPropagateError() {
    let analyzer = analyzer_with(MockModel::failing());

    let result = analyzer.analyze_vocabulary("[S]: alpha beta", "book");

    assert!(result.is_err());
}

/// Test a failing model still reports no-speech before parsing anything
#[test]
fn test_analyzeVocabulary_withFailingModelAndNoSpeech_shouldShortCircuit() {
    let analyzer = analyzer_with(MockModel::failing());

    let result = analyzer.analyze_vocabulary("[T]: teacher only", "book").unwrap();

    assert_eq!(result, AnalysisResult::NoStudentSpeech);
}
