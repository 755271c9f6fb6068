/*!
 * Linguistic model implementations for token analysis.
 *
 * This module contains the tagging interface the analysis pipeline runs on:
 * - `lexicon`: Built-in English model (closed-class lexicons + shape heuristics)
 * - `lemma`: Rule-based English lemmatizer used by the lexicon model
 * - `shape`: Surface-shape heuristics (alphabetic, numeric, email, URL)
 * - `mock`: Scripted model for tests
 */

use std::fmt::Debug;

use crate::errors::ModelError;

/// Part-of-speech tag from a fixed closed tag set (Universal POS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Adjective
    Adj,
    /// Adposition (preposition/postposition)
    Adp,
    /// Adverb
    Adv,
    /// Auxiliary verb
    Aux,
    /// Coordinating conjunction
    Cconj,
    /// Determiner
    Det,
    /// Interjection
    Intj,
    /// Noun
    Noun,
    /// Numeral
    Num,
    /// Particle
    Part,
    /// Pronoun
    Pron,
    /// Proper noun
    Propn,
    /// Punctuation
    Punct,
    /// Subordinating conjunction
    Sconj,
    /// Symbol
    Sym,
    /// Verb
    Verb,
    /// Other/unclassified
    X,
    /// Whitespace
    Space,
}

/// Syntactic dependency label describing a token's grammatical relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepLabel {
    /// Coordinating conjunction relation
    Cc,
    /// Case-marking relation
    Case,
    /// Determiner relation
    Det,
    /// Marker relation
    Mark,
    /// Punctuation relation
    Punct,
    /// Adverbial modifier
    Advmod,
    /// Auxiliary relation
    Aux,
    /// Nominal subject
    Nsubj,
    /// Object
    Obj,
    /// Unclassified dependency
    Dep,
}

/// A single linguistic token produced by parsing a text span
#[derive(Debug, Clone)]
pub struct Token {
    /// Surface text of the token
    pub text: String,

    /// Part-of-speech tag
    pub pos: PosTag,

    /// Syntactic dependency label
    pub dep: DepLabel,

    /// Whether the token is on the model's stop-word list
    pub is_stop: bool,

    /// Whether the surface form is purely alphabetic
    pub is_alpha: bool,

    /// Whether the token looks like a number
    pub like_num: bool,

    /// Whether the token looks like an email address
    pub like_email: bool,

    /// Whether the token looks like a URL
    pub like_url: bool,
}

/// Common trait for linguistic models
///
/// This trait defines the interface the analysis pipeline depends on,
/// allowing model implementations to be used interchangeably. Implementations
/// must be immutable after construction so a single model instance can be
/// shared across concurrent read-only analyses.
pub trait LanguageModel: Send + Sync + Debug {
    /// Parse free text into a sequence of classified tokens
    ///
    /// # Arguments
    /// * `text` - The text to parse
    ///
    /// # Returns
    /// * `Result<Vec<Token>, ModelError>` - The token sequence or a model fault
    fn parse(&self, text: &str) -> Result<Vec<Token>, ModelError>;

    /// Reduce one word to its dictionary base form
    ///
    /// # Arguments
    /// * `word` - The word to lemmatize
    ///
    /// # Returns
    /// * `Option<String>` - The lemma, or None when the model cannot produce one
    fn lemma(&self, word: &str) -> Option<String>;
}

pub mod lemma;
pub mod lexicon;
pub mod mock;
pub mod shape;

pub use lexicon::LexiconModel;
pub use mock::MockModel;
