//! Error types for the review-insight library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Remote classification API request failed
    #[error("API request failed: {0}")]
    ApiError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Lexicon could not be loaded or is unusable
    #[error("Lexicon error: {0}")]
    LexiconError(String),

    /// Data parsing error
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Network error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// CSV read error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unsupported input format
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),
}
