/*!
 * Core vocabulary analysis service.
 *
 * This module contains the VocabularyAnalyzer, which runs the full pipeline:
 * student speech segmentation, token filtering, word normalization, and the
 * set difference against the reference book vocabulary.
 */

use std::collections::BTreeSet;
use std::sync::Arc;

use log::debug;

use crate::analysis::filter::TokenFilter;
use crate::analysis::normalizer::WordNormalizer;
use crate::app_config::AnalysisConfig;
use crate::errors::AnalysisError;
use crate::spelling::SpellingDictionary;
use crate::tagger::LanguageModel;
use crate::transcript::extract_student_speech;

/// Metrics and word lists for one analyzed lesson
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyAnalysis {
    /// Number of distinct meaningful words the student used
    pub total_meaningful_words: usize,

    /// Number of those words absent from the book vocabulary
    pub unique_words_outside_book: usize,

    /// All meaningful student words, sorted lexicographically
    pub vocabulary_list: Vec<String>,

    /// Student words absent from the book, sorted lexicographically
    pub outside_book_list: Vec<String>,
}

/// Outcome of one analysis call
///
/// Consumers must match on the variant: the metrics of a `Analyzed` result
/// only exist when student speech was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisResult {
    /// Student speech was found and analyzed
    Analyzed(VocabularyAnalysis),
    /// The transcript contained no student speech
    NoStudentSpeech,
}

impl AnalysisResult {
    /// The analysis metrics, when student speech was found
    pub fn analysis(&self) -> Option<&VocabularyAnalysis> {
        match self {
            AnalysisResult::Analyzed(analysis) => Some(analysis),
            AnalysisResult::NoStudentSpeech => None,
        }
    }
}

/// Vocabulary analysis service over an injected model and dictionary
#[derive(Debug)]
pub struct VocabularyAnalyzer {
    /// Linguistic model shared across calls
    model: Arc<dyn LanguageModel>,

    /// Token exclusion rules
    filter: TokenFilter,

    /// Word normalizer
    normalizer: WordNormalizer,

    /// Minimum character length of a normalized word
    min_word_length: usize,
}

impl VocabularyAnalyzer {
    /// Create an analyzer with the given model, dictionary, and settings
    pub fn new(
        model: Arc<dyn LanguageModel>,
        dictionary: Arc<SpellingDictionary>,
        config: &AnalysisConfig,
    ) -> Self {
        let normalizer = WordNormalizer::new(Arc::clone(&model), dictionary);
        Self {
            model,
            filter: TokenFilter::default(),
            normalizer,
            min_word_length: config.min_word_length,
        }
    }

    /// Create an analyzer with default settings
    pub fn with_defaults(
        model: Arc<dyn LanguageModel>,
        dictionary: Arc<SpellingDictionary>,
    ) -> Self {
        Self::new(model, dictionary, &AnalysisConfig::default())
    }

    /// Extract the set of normalized meaningful words from free text
    pub fn extract_meaningful_words(&self, text: &str) -> Result<BTreeSet<String>, AnalysisError> {
        let tokens = self.model.parse(&text.to_lowercase())?;

        let mut words = BTreeSet::new();
        for token in &tokens {
            if !self.filter.is_meaningful(token) {
                continue;
            }

            let normalized = self.normalizer.normalize(&token.text);
            if normalized.chars().count() >= self.min_word_length {
                words.insert(normalized);
            }
        }

        debug!(
            "Extracted {} meaningful words from {} tokens",
            words.len(),
            tokens.len()
        );

        Ok(words)
    }

    /// Analyze the student vocabulary of one lesson against a reference book
    ///
    /// Returns `AnalysisResult::NoStudentSpeech` when segmentation yields no
    /// student text; errors only surface for unexpected model faults.
    pub fn analyze_vocabulary(
        &self,
        transcript: &str,
        book_text: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let student_speech = extract_student_speech(transcript);

        if student_speech.is_empty() {
            return Ok(AnalysisResult::NoStudentSpeech);
        }

        let student_words = self.extract_meaningful_words(&student_speech)?;
        let book_words = self.extract_meaningful_words(book_text)?;

        let outside_book_list: Vec<String> =
            student_words.difference(&book_words).cloned().collect();

        Ok(AnalysisResult::Analyzed(VocabularyAnalysis {
            total_meaningful_words: student_words.len(),
            unique_words_outside_book: outside_book_list.len(),
            vocabulary_list: student_words.into_iter().collect(),
            outside_book_list,
        }))
    }
}
