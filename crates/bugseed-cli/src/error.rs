//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credential environment variable unset or empty
    #[error("{0} not set")]
    MissingCredential(String),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(#[from] bugseed_llm::LlmError),

    /// Parser setup error
    #[error("Parser error: {0}")]
    Nlp(#[from] bugseed_nlp::NlpError),

    /// Extraction error
    #[error("Extraction failed: {0}")]
    Extractor(#[from] bugseed_extractor::ExtractorError),

    /// Seed selection error
    #[error("Seed selection failed: {0}")]
    Selector(#[from] bugseed_selector::SelectorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
