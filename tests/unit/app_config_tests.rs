/*!
 * Tests for application configuration
 */

use std::path::PathBuf;
use vocascope::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_config_default_shouldHaveSaneValues() {
    let config = Config::default();

    assert_eq!(config.language, "en");
    assert_eq!(config.analysis.min_word_length, 3);
    assert_eq!(config.spelling.max_edit_distance, 2);
    assert_eq!(config.spelling.term_index, 0);
    assert_eq!(config.spelling.count_index, 1);
    assert!(config.spelling.dictionary_path.is_none());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test the default configuration validates
#[test]
fn test_config_default_shouldValidate() {
    assert!(Config::default().validate().is_ok());
}

/// Test validation rejects unsupported languages
#[test]
fn test_config_validate_withUnsupportedLanguage_shouldFail() {
    let mut config = Config::default();
    config.language = "fr".to_string();

    assert!(config.validate().is_err());
}

/// Test validation rejects degenerate analysis settings
#[test]
fn test_config_validate_withZeroMinWordLength_shouldFail() {
    let mut config = Config::default();
    config.analysis.min_word_length = 0;

    assert!(config.validate().is_err());
}

/// Test validation rejects colliding dictionary column indices
#[test]
fn test_config_validate_withEqualColumnIndices_shouldFail() {
    let mut config = Config::default();
    config.spelling.term_index = 1;
    config.spelling.count_index = 1;

    assert!(config.validate().is_err());
}

/// Test JSON round trip preserves the configuration
#[test]
fn test_config_serde_shouldRoundTrip() {
    let mut config = Config::default();
    config.spelling.dictionary_path = Some(PathBuf::from("dict/frequency_en.txt"));
    config.log_level = LogLevel::Debug;

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.language, config.language);
    assert_eq!(parsed.log_level, LogLevel::Debug);
    assert_eq!(
        parsed.spelling.dictionary_path,
        Some(PathBuf::from("dict/frequency_en.txt"))
    );
}

/// Test partial JSON fills in defaults
#[test]
fn test_config_serde_withPartialJson_shouldUseDefaults() {
    let parsed: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(parsed.language, "en");
    assert_eq!(parsed.analysis.min_word_length, 3);
    assert_eq!(parsed.log_level, LogLevel::Info);
}
