//! Source configuration from TOML (`[catalog]`, `[academic]`, `[website]`)

use assistant_domain::{AcademicSettings, CatalogSettings, WebsiteSettings};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// YORDAM web service URL
    pub endpoint: String,
    /// Static token (not recommended, use `token_env`)
    pub token: Option<String>,
    /// Environment variable holding the token (default: "STATIC_YORDAM_TOKEN")
    pub token_env: String,
    /// Maximum number of hits requested
    pub limit: u32,
    pub timeout_seconds: u64,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        let d = CatalogSettings::default();
        Self {
            endpoint: d.endpoint,
            token: d.token,
            token_env: d.token_env,
            limit: d.limit,
            timeout_seconds: d.request_timeout.as_secs(),
        }
    }
}

impl FileCatalogConfig {
    pub fn to_settings(&self) -> CatalogSettings {
        CatalogSettings {
            endpoint: self.endpoint.clone(),
            token: self.token.clone(),
            token_env: self.token_env.clone(),
            limit: self.limit,
            request_timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}

/// Raw OAI-PMH configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAcademicConfig {
    pub endpoint: String,
    /// Tried in order when `endpoint` does not answer
    pub fallback_endpoints: Vec<String>,
    pub max_results: usize,
    pub timeout_seconds: u64,
}

impl Default for FileAcademicConfig {
    fn default() -> Self {
        let d = AcademicSettings::default();
        Self {
            endpoint: d.endpoint,
            fallback_endpoints: d.fallback_endpoints,
            max_results: d.max_results,
            timeout_seconds: d.request_timeout.as_secs(),
        }
    }
}

impl FileAcademicConfig {
    pub fn to_settings(&self) -> AcademicSettings {
        AcademicSettings {
            endpoint: self.endpoint.clone(),
            fallback_endpoints: self.fallback_endpoints.clone(),
            max_results: self.max_results,
            request_timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}

/// Raw website configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebsiteConfig {
    pub base_url: String,
    /// Contact page (default: `{base_url}/sayfalar/17995`)
    pub contact_url: Option<String>,
    pub max_announcements: usize,
    pub timeout_seconds: u64,
}

impl Default for FileWebsiteConfig {
    fn default() -> Self {
        let d = WebsiteSettings::default();
        Self {
            base_url: d.base_url,
            contact_url: d.contact_url,
            max_announcements: d.max_announcements,
            timeout_seconds: d.request_timeout.as_secs(),
        }
    }
}

impl FileWebsiteConfig {
    pub fn to_settings(&self) -> WebsiteSettings {
        WebsiteSettings {
            base_url: self.base_url.clone(),
            contact_url: self.contact_url.clone(),
            max_announcements: self.max_announcements,
            request_timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}
