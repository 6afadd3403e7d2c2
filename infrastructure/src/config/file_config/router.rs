//! Router configuration from TOML (`[router]` section)

use assistant_domain::RouterSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw router configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRouterConfig {
    /// Upper bound on one source call, in seconds
    pub provider_timeout_seconds: u64,
}

impl Default for FileRouterConfig {
    fn default() -> Self {
        Self {
            provider_timeout_seconds: RouterSettings::default().provider_timeout.as_secs(),
        }
    }
}

impl FileRouterConfig {
    pub fn to_settings(&self) -> RouterSettings {
        RouterSettings {
            provider_timeout: Duration::from_secs(self.provider_timeout_seconds),
        }
    }
}
