//! Completion backend configuration.

use std::fmt;
use std::time::Duration;

use llm_spi::{LlmError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Instruction-tuned model served by the legacy completions endpoint.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Endpoint, credential and model selection for text completion.
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    /// API root (no trailing slash)
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn builder() -> LlmConfigBuilder {
        LlmConfigBuilder::new()
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Builder for LlmConfig.
#[derive(Debug, Default)]
pub struct LlmConfigBuilder {
    config: LlmConfig,
}

impl LlmConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key. Blank keys count as absent.
    pub fn api_key(mut self, key: &str) -> Self {
        let key = key.trim();
        self.config.api_key = (!key.is_empty()).then(|| key.to_string());
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn model(mut self, model: &str) -> Self {
        self.config.model = model.trim().to_string();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn build(self) -> Result<LlmConfig> {
        let config = self.config;
        if config.timeout_secs == 0 {
            return Err(LlmError::ConfigError("timeout must be at least 1 second".to_string()));
        }
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(LlmError::ConfigError("base_url must be an http(s) URL".to_string()));
        }
        if config.model.is_empty() {
            return Err(LlmError::ConfigError("model is required".to_string()));
        }
        Ok(config)
    }
}
