//! Bugseed LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `bugseed-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible chat-completions API
//!
//! # Examples
//!
//! ```
//! use bugseed_llm::MockProvider;
//! use bugseed_domain::traits::LlmProvider;
//! use bugseed_domain::{CompletionParams, Message};
//!
//! let provider = MockProvider::new("[]");
//! let params = CompletionParams { temperature: 0.2, max_completion_tokens: 600 };
//! let result = provider.complete(&[Message::user("test prompt")], &params).unwrap();
//! assert_eq!(result, "[]");
//! ```

#![warn(missing_docs)]

pub mod openai;

use bugseed_domain::traits::LlmProvider;
use bugseed_domain::{CompletionParams, Message};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use openai::{OpenAiConfig, OpenAiProvider};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Credential environment variable is unset or empty
    #[error("{0} not set")]
    MissingCredential(String),

    /// Invalid provider configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// A recorded completion request
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Messages as sent
    pub messages: Vec<Message>,
    /// Decoding parameters as sent
    pub params: CompletionParams,
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error,
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses can be keyed by the content of the last message in the request;
/// anything else gets the default response.
///
/// # Examples
///
/// ```
/// use bugseed_llm::MockProvider;
/// use bugseed_domain::traits::LlmProvider;
/// use bugseed_domain::{CompletionParams, Message};
///
/// let params = CompletionParams { temperature: 0.2, max_completion_tokens: 600 };
///
/// let mut provider = MockProvider::new("not json");
/// provider.add_response("prompt1", "[]");
/// assert_eq!(provider.complete(&[Message::user("prompt1")], &params).unwrap(), "[]");
/// assert_eq!(provider.complete(&[Message::user("other")], &params).unwrap(), "not json");
/// assert_eq!(provider.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all requests
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a specific response for requests whose last message has this content
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Configure to return an error for a specific last-message content
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), MockReply::Error);
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Forget recorded requests
    pub fn reset(&self) {
        lock(&self.requests).clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("[]")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    fn complete(
        &self,
        messages: &[Message],
        params: &CompletionParams,
    ) -> Result<String, Self::Error> {
        lock(&self.requests).push(RecordedRequest {
            messages: messages.to_vec(),
            params: *params,
        });

        let key = messages.last().map(|m| m.content.as_str()).unwrap_or("");
        match lock(&self.responses).get(key) {
            Some(MockReply::Text(response)) => Ok(response.clone()),
            Some(MockReply::Error) => Err(LlmError::Other("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }
}

// A panic while holding one of these locks leaves plain data behind, so the
// poisoned guard is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
