use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Analysis language code (ISO 639-1)
    #[serde(default = "default_language")]
    pub language: String,

    /// Vocabulary analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Spelling dictionary settings
    #[serde(default)]
    pub spelling: SpellingConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Configuration for the vocabulary analysis pipeline
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalysisConfig {
    /// Minimum length of a normalized word to count as vocabulary.
    /// Words at or below length - 1 are discarded after normalization.
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_word_length: default_min_word_length(),
        }
    }
}

/// Configuration for the spelling dictionary
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpellingConfig {
    /// Path to a SymSpell frequency dictionary file (term and count per line).
    /// When absent, spelling correction is disabled and words pass through unchanged.
    #[serde(default)]
    pub dictionary_path: Option<PathBuf>,

    /// Maximum edit distance for correction candidates
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: i64,

    /// Column index of the term in each dictionary row
    #[serde(default)]
    pub term_index: i64,

    /// Column index of the frequency count in each dictionary row
    #[serde(default = "default_count_index")]
    pub count_index: i64,
}

impl Default for SpellingConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            max_edit_distance: default_max_edit_distance(),
            term_index: 0,
            count_index: default_count_index(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_min_word_length() -> usize {
    3
}

fn default_max_edit_distance() -> i64 {
    2
}

fn default_count_index() -> i64 {
    1
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Only the built-in English model is available
        if self.language.to_lowercase() != "en" {
            return Err(anyhow!(
                "Unsupported analysis language: '{}' (only 'en' is available)",
                self.language
            ));
        }

        if self.analysis.min_word_length == 0 {
            return Err(anyhow!("analysis.min_word_length must be at least 1"));
        }

        if self.spelling.max_edit_distance < 0 {
            return Err(anyhow!("spelling.max_edit_distance must not be negative"));
        }

        if self.spelling.term_index == self.spelling.count_index {
            return Err(anyhow!(
                "spelling.term_index and spelling.count_index must differ"
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            analysis: AnalysisConfig::default(),
            spelling: SpellingConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
