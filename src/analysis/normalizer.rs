/*!
 * Word normalization: lowercasing, spelling correction, lemmatization.
 *
 * Normalization never fails. A word with no correction candidate keeps its
 * original spelling, and a word the model cannot lemmatize keeps its
 * corrected form, so the output is always the best available string.
 */

use std::sync::Arc;

use crate::spelling::SpellingDictionary;
use crate::tagger::LanguageModel;

/// Normalizer that maps one surface word to one canonical form
#[derive(Debug)]
pub struct WordNormalizer {
    /// Linguistic model used for lemmatization
    model: Arc<dyn LanguageModel>,

    /// Spelling dictionary used for correction
    dictionary: Arc<SpellingDictionary>,
}

impl WordNormalizer {
    /// Create a normalizer over the given model and dictionary
    pub fn new(model: Arc<dyn LanguageModel>, dictionary: Arc<SpellingDictionary>) -> Self {
        Self { model, dictionary }
    }

    /// Normalize one word: lowercase, spell-correct, lemmatize
    pub fn normalize(&self, word: &str) -> String {
        let word = word.trim().to_lowercase();

        // Known spellings are kept; unknown ones take the best candidate,
        // falling back to the original when the dictionary has none
        let corrected = if self.dictionary.is_known(&word) {
            word
        } else {
            self.dictionary.correct(&word).unwrap_or(word)
        };

        match self.model.lemma(&corrected) {
            Some(lemma) if !lemma.is_empty() => lemma,
            _ => corrected,
        }
    }
}
