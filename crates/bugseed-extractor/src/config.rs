//! Configuration for the Extractor

use bugseed_domain::CompletionParams;
use serde::{Deserialize, Serialize};

/// Default sampling temperature for refinement
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Default output-token budget for refinement
pub const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 600;

/// Configuration for the refinement step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Sampling temperature sent to the model
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens the model may generate
    #[serde(default = "default_max_completion_tokens")]
    pub max_completion_tokens: u32,

    /// Unwrap a Markdown code fence around the response before parsing it
    #[serde(default)]
    pub unwrap_code_fences: bool,
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_completion_tokens() -> u32 {
    DEFAULT_MAX_COMPLETION_TOKENS
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_completion_tokens: DEFAULT_MAX_COMPLETION_TOKENS,
            unwrap_code_fences: false,
        }
    }
}

impl ExtractorConfig {
    /// Decoding parameters for the completion request
    pub fn completion_params(&self) -> CompletionParams {
        CompletionParams {
            temperature: self.temperature,
            max_completion_tokens: self.max_completion_tokens,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.temperature.is_finite() || !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature must be within [0.0, 2.0], got {}",
                self.temperature
            ));
        }
        if self.max_completion_tokens == 0 {
            return Err("max_completion_tokens must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
