//! Generative fallback configuration from TOML (`[generative]` section)

use assistant_domain::GenerativeSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw OpenAI-compatible API configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerativeConfig {
    /// Base URL of the API (can point at any OpenAI-compatible server)
    pub base_url: String,
    /// Direct API key (not recommended, use the env var instead)
    pub api_key: Option<String>,
    /// Environment variable name for the API key (default: "OPENAI_API_KEY")
    pub api_key_env: String,
    pub model: String,
    pub temperature: f32,
    /// Token budget for regular answers
    pub max_tokens: u32,
    /// Token budget after a source failed
    pub error_max_tokens: u32,
    pub timeout_seconds: u64,
}

impl Default for FileGenerativeConfig {
    fn default() -> Self {
        let d = GenerativeSettings::default();
        Self {
            base_url: d.base_url,
            api_key: d.api_key,
            api_key_env: d.api_key_env,
            model: d.model,
            temperature: d.temperature,
            max_tokens: d.max_tokens,
            error_max_tokens: d.error_max_tokens,
            timeout_seconds: d.request_timeout.as_secs(),
        }
    }
}

impl FileGenerativeConfig {
    pub fn to_settings(&self) -> GenerativeSettings {
        GenerativeSettings {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            api_key_env: self.api_key_env.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            error_max_tokens: self.error_max_tokens,
            request_timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}
