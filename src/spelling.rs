/*!
 * Spelling dictionary backed by a SymSpell frequency dictionary.
 *
 * The dictionary is loaded once from a `term count` file and is read-only
 * afterwards. When no dictionary file is configured the instance is empty:
 * no word is known and no correction is offered, so word normalization
 * degrades to the identity step instead of failing.
 */

use std::fmt;
use std::path::Path;

use log::info;
use symspell::{AsciiStringStrategy, SymSpell, SymSpellBuilder, Verbosity};

use crate::app_config::SpellingConfig;
use crate::errors::DictionaryError;

/// Read-only spelling dictionary with correction candidates
pub struct SpellingDictionary {
    /// Loaded SymSpell index, when a dictionary file was configured
    symspell: Option<SymSpell<AsciiStringStrategy>>,

    /// Maximum edit distance for correction candidates
    max_edit_distance: i64,
}

impl SpellingDictionary {
    /// Create an empty dictionary that knows no words and offers no corrections
    pub fn empty() -> Self {
        SpellingDictionary {
            symspell: None,
            max_edit_distance: 0,
        }
    }

    /// Build a dictionary from the spelling configuration
    pub fn from_config(config: &SpellingConfig) -> Result<Self, DictionaryError> {
        match &config.dictionary_path {
            Some(path) => Self::from_file(
                path,
                config.max_edit_distance,
                config.term_index,
                config.count_index,
            ),
            None => Ok(Self::empty()),
        }
    }

    /// Load a SymSpell frequency dictionary file (one `term count` row per line)
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        max_edit_distance: i64,
        term_index: i64,
        count_index: i64,
    ) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(DictionaryError::FileUnreadable(format!(
                "dictionary file not found: {}",
                path.display()
            )));
        }

        let mut symspell: SymSpell<AsciiStringStrategy> = SymSpellBuilder::default()
            .max_dictionary_edit_distance(max_edit_distance)
            .build()
            .map_err(|e| DictionaryError::Malformed(e.to_string()))?;

        let path_str = path.to_str().ok_or_else(|| {
            DictionaryError::FileUnreadable(format!("non-UTF-8 dictionary path: {}", path.display()))
        })?;

        if !symspell.load_dictionary(path_str, term_index, count_index, " ") {
            return Err(DictionaryError::Malformed(format!(
                "failed to load dictionary rows from {}",
                path.display()
            )));
        }

        info!("Spelling dictionary loaded from {}", path.display());

        Ok(SpellingDictionary {
            symspell: Some(symspell),
            max_edit_distance,
        })
    }

    /// Whether a dictionary file is loaded
    pub fn is_enabled(&self) -> bool {
        self.symspell.is_some()
    }

    /// Whether the word is a known-correct spelling
    pub fn is_known(&self, word: &str) -> bool {
        match &self.symspell {
            Some(symspell) => !symspell.lookup(word, Verbosity::Top, 0).is_empty(),
            None => false,
        }
    }

    /// Best correction candidate for a misspelled word, if any
    pub fn correct(&self, word: &str) -> Option<String> {
        let symspell = self.symspell.as_ref()?;
        symspell
            .lookup(word, Verbosity::Top, self.max_edit_distance)
            .into_iter()
            .next()
            .map(|suggestion| suggestion.term)
    }
}

impl fmt::Debug for SpellingDictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SpellingDictionary")
            .field("enabled", &self.is_enabled())
            .field("max_edit_distance", &self.max_edit_distance)
            .finish()
    }
}
