//! Chat messages and decoding parameters for the language model

use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that frame the conversation
    System,
    /// The request
    User,
    /// A prior model turn
    Assistant,
}

/// A role-tagged chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Author
    pub role: Role,
    /// Text content
    pub content: String,
}

impl Message {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Decoding parameters sent with every completion request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    /// Sampling temperature; low values bias toward deterministic output
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_completion_tokens: u32,
}
