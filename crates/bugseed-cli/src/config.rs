//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use bugseed_extractor::ExtractorConfig;
use bugseed_llm::openai::{DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use bugseed_nlp::HttpParserConfig;
use bugseed_selector::SelectorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default bug-report table
pub const DEFAULT_INPUT: &str = "data/sample_bug_reports.csv";

/// Default extraction stream
pub const DEFAULT_OUTPUT: &str = "extracted_test_inputs.jsonl";

/// CLI configuration.
///
/// Every section is optional in the file; absent sections take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input and output locations
    #[serde(default)]
    pub pipeline: PipelineSettings,

    /// Model provider settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Refinement settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Parse service; without it the linguistic pass is skipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<HttpParserConfig>,

    /// Seed report settings
    #[serde(default)]
    pub selector: SelectorConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Bug-report CSV
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// JSON Lines output, also the input of `seeds`
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

/// Model provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the chat-completions API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Request timeout in seconds; unset waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let contents = fs::read_to_string(path).map_err(|e| {
                    CliError::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                Self::from_toml(&contents)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate().map_err(CliError::Config)?;
        self.selector
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;

        if self.llm.model.trim().is_empty() {
            return Err(CliError::Config("llm.model must not be empty".to_string()));
        }
        if self.llm.api_key_env.trim().is_empty() {
            return Err(CliError::Config(
                "llm.api_key_env must not be empty".to_string(),
            ));
        }
        check_endpoint("llm.endpoint", &self.llm.endpoint)?;
        if let Some(parser) = &self.parser {
            check_endpoint("parser.endpoint", &parser.endpoint)?;
        }
        Ok(())
    }
}

fn check_endpoint(name: &str, endpoint: &str) -> Result<()> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(())
    } else {
        Err(CliError::Config(format!(
            "{} must be an http(s) URL, got '{}'",
            name, endpoint
        )))
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            timeout_secs: None,
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.pipeline.input, PathBuf::from("data/sample_bug_reports.csv"));
        assert_eq!(config.pipeline.output, PathBuf::from("extracted_test_inputs.jsonl"));
        assert_eq!(config.llm.model, "gpt-4.1");
        assert_eq!(config.llm.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.llm.timeout_secs, None);
        assert_eq!(config.selector.top_k, 3);
        assert!(config.parser.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_means_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [llm]
            model = "gpt-4o-mini"
            timeout_secs = 30

            [extractor]
            temperature = 0.0

            [parser]
            endpoint = "http://localhost:8000/parse"

            [selector]
            top_k = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.llm.timeout_secs, Some(30));
        assert_eq!(config.extractor.temperature, 0.0);
        assert_eq!(config.extractor.max_completion_tokens, 600);
        assert_eq!(config.parser.as_ref().unwrap().model, "en_core_web_sm");
        assert_eq!(config.selector.top_k, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = AppConfig::default();
        config.selector.top_k = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.llm.endpoint = "api.openai.com".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.parser = Some(HttpParserConfig::new("localhost:8000"));
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.extractor.temperature = 3.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            AppConfig::from_toml("[llm\nmodel = 1"),
            Err(CliError::Toml(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bugseed.toml");
        fs::write(&path, "[pipeline]\ninput = \"bugs.csv\"\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.pipeline.input, PathBuf::from("bugs.csv"));
        assert_eq!(config.pipeline.output, PathBuf::from(DEFAULT_OUTPUT));
    }
}
