//! Trait definitions for external capabilities
//!
//! These traits define the boundaries between pipeline logic and
//! infrastructure. Implementations live in other crates.

use crate::{CompletionParams, Document, Message};

/// Trait for language-model completion
///
/// Implemented by the infrastructure layer (bugseed-llm)
pub trait LlmProvider {
    /// Error type for completion requests
    type Error;

    /// Send the messages and return the first completion's text
    fn complete(&self, messages: &[Message], params: &CompletionParams)
        -> Result<String, Self::Error>;
}

/// Trait for linguistic analysis of text
///
/// Implemented by the infrastructure layer (bugseed-nlp)
pub trait LinguisticParser {
    /// Error type for parse requests
    type Error;

    /// Parse text into an annotated document
    fn parse(&self, text: &str) -> Result<Document, Self::Error>;
}
