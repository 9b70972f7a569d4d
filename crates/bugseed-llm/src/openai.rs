//! OpenAI Provider Implementation
//!
//! Non-streaming client for the OpenAI chat-completions API. Any server that
//! speaks the same wire format (vLLM, Ollama in OpenAI mode) works by pointing
//! `endpoint` at it.
//!
//! # Features
//!
//! - Blocking HTTP communication, one request per call
//! - Explicit configuration (model, credential, endpoint); no global client
//! - No retries and, unless configured, no timeout
//!
//! # Examples
//!
//! ```no_run
//! use bugseed_llm::{OpenAiConfig, OpenAiProvider};
//!
//! let config = OpenAiConfig::new("gpt-4.1", "sk-...");
//! let provider = OpenAiProvider::new(config).unwrap();
//! ```

use crate::LlmError;
use bugseed_domain::traits::LlmProvider;
use bugseed_domain::{CompletionParams, Message};
use reqwest::blocking::Client;
use reqwest::header;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default API base URL
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-4.1";

/// Environment variable holding the API key by default
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Longest slice of an error body kept in error messages
const ERROR_SNIPPET_CHARS: usize = 300;

/// Connection settings for [`OpenAiProvider`]
#[derive(Clone)]
pub struct OpenAiConfig {
    /// Model identifier sent with every request
    pub model: String,
    /// API base URL; `/chat/completions` is appended
    pub endpoint: String,
    /// Bearer credential
    pub api_key: String,
    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl OpenAiConfig {
    /// Create a configuration against the default endpoint
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            timeout_secs: None,
        }
    }

    /// Read the credential from `env_var`
    ///
    /// An unset, empty or whitespace-only variable is a missing credential.
    pub fn from_env(model: impl Into<String>, env_var: &str) -> Result<Self, LlmError> {
        let api_key = std::env::var(env_var).unwrap_or_default();
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(LlmError::MissingCredential(env_var.to_string()));
        }
        Ok(Self::new(model, api_key))
    }

    /// Override the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set a request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: Option<u64>) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Full chat-completions URL
    pub fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// OpenAI chat-completions provider
pub struct OpenAiProvider {
    config: OpenAiConfig,
    url: String,
    client: Client,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_completion_tokens: u32,
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the endpoint is not an http(s) URL
    /// - the API key cannot be used as a header value
    /// - the HTTP client cannot be built
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        let endpoint = config.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(LlmError::Config(format!(
                "endpoint must start with http:// or https://, got '{}'",
                config.endpoint
            )));
        }

        let mut headers = header::HeaderMap::new();
        let bearer = header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| LlmError::Config(format!("invalid API key header: {}", e)))?;
        headers.insert(header::AUTHORIZATION, bearer);

        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| LlmError::Config(format!("failed to build HTTP client: {}", e)))?;

        let url = config.chat_url();

        info!(
            model = %config.model,
            endpoint = %config.endpoint,
            timeout_secs = ?config.timeout_secs,
            "OpenAiProvider initialized"
        );

        Ok(Self {
            config,
            url,
            client,
        })
    }

    /// Model identifier sent with requests
    pub fn model(&self) -> &str {
        &self.config.model
    }
}

impl LlmProvider for OpenAiProvider {
    type Error = LlmError;

    fn complete(
        &self,
        messages: &[Message],
        params: &CompletionParams,
    ) -> Result<String, Self::Error> {
        let started = Instant::now();
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            temperature: params.temperature,
            max_completion_tokens: params.max_completion_tokens,
        };

        debug!(
            model = %self.config.model,
            messages = messages.len(),
            "POST {}", self.url
        );

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.config.model.clone()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if !status.is_success() {
            let text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status,
                snippet(&text)
            )));
        }

        let decoded: ChatCompletionResponse = response
            .json()
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        debug!(
            latency_ms = started.elapsed().as_millis() as u64,
            choices = decoded.choices.len(),
            "chat completion received"
        );

        first_choice_text(decoded)
    }
}

/// Text of the first choice; a `null` content reads as empty text
fn first_choice_text(response: ChatCompletionResponse) -> Result<String, LlmError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| LlmError::InvalidResponse("response contained no choices".to_string()))
}

fn snippet(text: &str) -> String {
    let mut out: String = text.chars().take(ERROR_SNIPPET_CHARS).collect();
    if text.chars().count() > ERROR_SNIPPET_CHARS {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = OpenAiConfig::new("gpt-4.1", "sk-test");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.chat_url(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn test_chat_url_trims_trailing_slash() {
        let config = OpenAiConfig::new("m", "k").with_endpoint("http://localhost:8000/v1/");
        assert_eq!(config.chat_url(), "http://localhost:8000/v1/chat/completions");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = OpenAiConfig::new("m", "sk-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_from_env_missing() {
        let result = OpenAiConfig::from_env("m", "BUGSEED_TEST_UNSET_CREDENTIAL_VAR");
        assert!(matches!(result, Err(LlmError::MissingCredential(var)) if var == "BUGSEED_TEST_UNSET_CREDENTIAL_VAR"));
    }

    #[test]
    fn test_provider_rejects_bad_endpoint() {
        let config = OpenAiConfig::new("m", "k").with_endpoint("localhost:8000");
        assert!(matches!(OpenAiProvider::new(config), Err(LlmError::Config(_))));
    }

    #[test]
    fn test_request_body_shape() {
        let messages = vec![Message::system("s"), Message::user("u")];
        let body = ChatCompletionRequest {
            model: "gpt-4.1",
            messages: &messages,
            temperature: 0.25,
            max_completion_tokens: 600,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4.1");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "u");
        assert_eq!(json["temperature"], 0.25);
        assert_eq!(json["max_completion_tokens"], 600);
    }

    #[test]
    fn test_first_choice_text() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "[]"}},
                            {"message": {"content": "ignored"}}]}"#,
        )
        .unwrap();
        assert_eq!(first_choice_text(response).unwrap(), "[]");
    }

    #[test]
    fn test_null_content_reads_as_empty() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert_eq!(first_choice_text(response).unwrap(), "");
    }

    #[test]
    fn test_no_choices_is_an_error() {
        let response: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            first_choice_text(response),
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_snippet_truncates() {
        let long = "x".repeat(ERROR_SNIPPET_CHARS + 10);
        let short = snippet(&long);
        assert!(short.ends_with("..."));
        assert_eq!(short.chars().count(), ERROR_SNIPPET_CHARS + 3);
    }

    #[test]
    fn test_unreachable_endpoint() {
        let config = OpenAiConfig::new("m", "k")
            .with_endpoint("http://127.0.0.1:1")
            .with_timeout_secs(Some(5));
        let provider = OpenAiProvider::new(config).unwrap();
        let params = CompletionParams {
            temperature: 0.2,
            max_completion_tokens: 16,
        };

        let result = provider.complete(&[Message::user("ping")], &params);
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
