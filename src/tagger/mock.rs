/*!
 * Mock linguistic model implementations for testing.
 *
 * This module provides scripted models that simulate different behaviors:
 * - `MockModel::working()` - Tags every whitespace-separated word with open-class defaults
 * - `MockModel::failing()` - Always fails with a model error
 *
 * Individual token attributes and lemmas can be scripted per word, so tests
 * can pin exact part-of-speech, dependency, and flag combinations without
 * depending on lexicon heuristics.
 */

use std::collections::HashMap;

use crate::errors::ModelError;
use crate::tagger::{shape, DepLabel, LanguageModel, PosTag, Token};

/// Behavior mode for the mock model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds, using scripted or default tokens
    Working,
    /// Always fails with a tokenization error
    Failing,
}

/// Build a token with open-class defaults for the given surface text
pub fn token(text: &str) -> Token {
    Token {
        text: text.to_string(),
        pos: PosTag::Noun,
        dep: DepLabel::Dep,
        is_stop: false,
        is_alpha: shape::is_alphabetic(text),
        like_num: false,
        like_email: false,
        like_url: false,
    }
}

/// Build a token with the given tag and dependency label
pub fn token_with(text: &str, pos: PosTag, dep: DepLabel) -> Token {
    Token {
        pos,
        dep,
        ..token(text)
    }
}

/// Build a stop-word token
pub fn stop_token(text: &str, pos: PosTag) -> Token {
    Token {
        is_stop: true,
        ..token_with(text, pos, DepLabel::Dep)
    }
}

/// Mock linguistic model for testing analysis behavior
#[derive(Debug)]
pub struct MockModel {
    /// Behavior mode
    behavior: MockBehavior,
    /// Scripted tokens keyed by surface text
    token_overrides: HashMap<String, Token>,
    /// Scripted lemmas keyed by surface text
    lemma_overrides: HashMap<String, String>,
    /// Whether unscripted words lemmatize to themselves
    identity_lemmas: bool,
}

impl MockModel {
    /// Create a new mock model with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            token_overrides: HashMap::new(),
            lemma_overrides: HashMap::new(),
            identity_lemmas: true,
        }
    }

    /// Create a working mock model that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock model that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Script the token produced for one surface word
    pub fn with_token(mut self, token: Token) -> Self {
        self.token_overrides.insert(token.text.clone(), token);
        self
    }

    /// Script the lemma produced for one word
    pub fn with_lemma(mut self, word: &str, lemma: &str) -> Self {
        self.lemma_overrides.insert(word.to_string(), lemma.to_string());
        self
    }

    /// Make unscripted words yield no lemma at all
    pub fn without_identity_lemmas(mut self) -> Self {
        self.identity_lemmas = false;
        self
    }
}

impl LanguageModel for MockModel {
    fn parse(&self, text: &str) -> Result<Vec<Token>, ModelError> {
        match self.behavior {
            MockBehavior::Working => Ok(text
                .split_whitespace()
                .map(|word| {
                    self.token_overrides
                        .get(word)
                        .cloned()
                        .unwrap_or_else(|| token(word))
                })
                .collect()),
            MockBehavior::Failing => Err(ModelError::Tokenization(
                "simulated tokenizer failure".to_string(),
            )),
        }
    }

    fn lemma(&self, word: &str) -> Option<String> {
        if let Some(lemma) = self.lemma_overrides.get(word) {
            return Some(lemma.clone());
        }
        if self.identity_lemmas {
            Some(word.to_string())
        } else {
            None
        }
    }
}
