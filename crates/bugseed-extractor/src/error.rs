//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
///
/// An unparseable model response is not an error: it is reported through
/// [`crate::RefinementOutcome`] and degrades the row to an empty list.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Linguistic parser error
    #[error("Parser error: {0}")]
    Parser(String),

    /// Literal pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Malformed bug-report table
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error on the input or output stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for extractor operations
pub type Result<T> = std::result::Result<T, ExtractorError>;
