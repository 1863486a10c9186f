//! Configuration file parsing for the API server.
//!
//! Loads settings from TOML files including bind address, the approved
//! vessel list location, the LLM backend and extractor limits.

use docguard_extractor::ExtractorConfig;
use docguard_llm::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// API configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field holds an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// The environment variable holding the API key is unset or empty
    #[error("Missing API key: environment variable {0} is not set")]
    MissingApiKey(String),
}

/// API configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 8000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// JSON file holding the approved vessel names
    #[serde(default = "default_vessels_path")]
    pub vessels_path: PathBuf,

    /// LLM backend settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Extraction limits
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// LLM backend configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// API base URL
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// Environment variable the API key is read from
    pub api_key_env: String,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LlmConfig {
    /// HTTP request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    8000
}

fn default_vessels_path() -> PathBuf {
    PathBuf::from("assets/valid_vessels.json")
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            vessels_path: default_vessels_path(),
            llm: LlmConfig::default(),
            extractor: ExtractorConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ApiConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.model.trim().is_empty() {
            return Err(ConfigError::Invalid("llm.model must not be empty".to_string()));
        }
        if self.llm.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "llm.timeout_secs must be greater than 0".to_string(),
            ));
        }
        self.extractor
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Read the LLM API key from the configured environment variable
    pub fn api_key(&self) -> Result<String, ConfigError> {
        match std::env::var(&self.llm.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey(self.llm.api_key_env.clone())),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 8000);
        assert_eq!(config.llm.model, "gemini-2.5-flash");
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_addr() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            vessels_path = "/etc/docguard/vessels.json"

            [llm]
            endpoint = "http://localhost:8081"
            model = "gemini-2.0-flash"
            api_key_env = "MY_KEY"
            timeout_secs = 10

            [extractor]
            max_text_length = 2000
            extraction_timeout_secs = 15
        "#;

        let config = ApiConfig::from_toml(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.vessels_path, PathBuf::from("/etc/docguard/vessels.json"));
        assert_eq!(config.llm.endpoint, "http://localhost:8081");
        assert_eq!(config.llm.timeout(), Duration::from_secs(10));
        assert_eq!(config.extractor.max_text_length, 2000);
    }

    #[test]
    fn test_sections_are_optional() {
        let config = ApiConfig::from_toml("bind_port = 8123").unwrap();
        assert_eq!(config.bind_port, 8123);
        assert_eq!(config.llm.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.extractor.extraction_timeout_secs, 120);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            ApiConfig::from_toml("[llm]\nmodel = \"\""),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ApiConfig::from_toml("[extractor]\nmax_text_length = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ApiConfig::from_toml("bind_port = \"eighty\""),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_missing_api_key() {
        let mut config = ApiConfig::default();
        config.llm.api_key_env = "DOCGUARD_TEST_UNSET_KEY_VAR".to_string();
        match config.api_key() {
            Err(ConfigError::MissingApiKey(var)) => assert_eq!(var, "DOCGUARD_TEST_UNSET_KEY_VAR"),
            other => panic!("Expected MissingApiKey, got {:?}", other),
        }
    }
}
