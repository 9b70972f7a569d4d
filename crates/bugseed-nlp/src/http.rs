//! Remote parse service client
//!
//! Sends `{"text": ..., "model": ...}` to the configured endpoint and expects
//! the `Document` JSON back. The service is typically a thin wrapper around a
//! statistical pipeline such as `en_core_web_sm`.

use crate::NlpError;
use bugseed_domain::traits::LinguisticParser;
use bugseed_domain::Document;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Default model name requested from the service
pub const DEFAULT_PARSER_MODEL: &str = "en_core_web_sm";

/// Settings for [`HttpParser`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpParserConfig {
    /// Full URL of the parse endpoint
    pub endpoint: String,

    /// Pipeline name forwarded to the service
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds; `None` waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_model() -> String {
    DEFAULT_PARSER_MODEL.to_string()
}

impl HttpParserConfig {
    /// Create a configuration for `endpoint` with the default model
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: default_model(),
            timeout_secs: None,
        }
    }
}

#[derive(Serialize)]
struct ParseRequest<'a> {
    text: &'a str,
    model: &'a str,
}

/// Parser backed by an HTTP parse service
pub struct HttpParser {
    config: HttpParserConfig,
    client: Client,
}

impl HttpParser {
    /// Create a new parser client
    pub fn new(config: HttpParserConfig) -> Result<Self, NlpError> {
        let endpoint = config.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(NlpError::Config(format!(
                "parser endpoint must start with http:// or https://, got '{}'",
                config.endpoint
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| NlpError::Config(format!("failed to build HTTP client: {}", e)))?;

        info!(endpoint = %config.endpoint, model = %config.model, "HttpParser initialized");

        Ok(Self { config, client })
    }
}

impl LinguisticParser for HttpParser {
    type Error = NlpError;

    fn parse(&self, text: &str) -> Result<Document, Self::Error> {
        let body = ParseRequest {
            text,
            model: &self.config.model,
        };

        debug!(chars = text.len(), "POST {}", self.config.endpoint);

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .map_err(|e| NlpError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(NlpError::Communication(format!("HTTP {}: {}", status, text)));
        }

        let document: Document = response
            .json()
            .map_err(|e| NlpError::InvalidDocument(format!("Failed to parse response: {}", e)))?;
        document.validate().map_err(NlpError::InvalidDocument)?;

        debug!(
            tokens = document.tokens.len(),
            entities = document.entities.len(),
            "document received"
        );
        Ok(document)
    }
}
