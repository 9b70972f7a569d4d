//! Error types for the Selector

use thiserror::Error;

/// Errors that can occur while reading or reporting records
#[derive(Error, Debug)]
pub enum SelectorError {
    /// I/O error on the record stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the record stream is not a valid output record
    #[error("invalid record on line {line}: {source}")]
    Json {
        /// 1-based line number
        line: usize,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// Report serialization error
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for selector operations
pub type Result<T> = std::result::Result<T, SelectorError>;
