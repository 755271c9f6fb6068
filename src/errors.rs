/*!
 * Error types for the vocascope application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur inside the linguistic model
#[derive(Error, Debug)]
pub enum ModelError {
    /// Error when tokenizing input text fails
    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    /// Error when the model cannot classify a token
    #[error("Tagging failed for token '{token}': {message}")]
    Tagging {
        /// The surface text of the offending token
        token: String,
        /// Description of the fault
        message: String,
    },
}

/// Errors that can occur when loading or querying the spelling dictionary
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when the dictionary file cannot be read
    #[error("Failed to read dictionary file: {0}")]
    FileUnreadable(String),

    /// Error when the dictionary file has an unexpected layout
    #[error("Malformed dictionary file: {0}")]
    Malformed(String),
}

/// Errors that can occur during vocabulary analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Error from the linguistic model
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the linguistic model
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Error from the spelling dictionary
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Error from vocabulary analysis
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
