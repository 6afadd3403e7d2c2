//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Defaults mirror the domain settings, and each section converts into its
//! serde-free domain counterpart.

mod generative;
mod output;
mod router;
mod sources;

pub use generative::FileGenerativeConfig;
pub use output::FileOutputConfig;
pub use router::FileRouterConfig;
pub use sources::{FileAcademicConfig, FileCatalogConfig, FileWebsiteConfig};

use assistant_domain::AssistantSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("{0} must be below router.provider_timeout_seconds")]
    TimeoutExceedsStage(&'static str),

    #[error("{0} must be at least 1")]
    ZeroLimit(&'static str),

    #[error("generative.model cannot be empty")]
    EmptyModelName,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Fallback chain settings
    pub router: FileRouterConfig,
    /// YORDAM catalog
    pub catalog: FileCatalogConfig,
    /// OAI-PMH repository
    pub academic: FileAcademicConfig,
    /// Library website
    pub website: FileWebsiteConfig,
    /// Generative fallback model
    pub generative: FileGenerativeConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let timeouts = [
            ("router.provider_timeout_seconds", self.router.provider_timeout_seconds),
            ("catalog.timeout_seconds", self.catalog.timeout_seconds),
            ("academic.timeout_seconds", self.academic.timeout_seconds),
            ("website.timeout_seconds", self.website.timeout_seconds),
            ("generative.timeout_seconds", self.generative.timeout_seconds),
        ];
        if let Some((field, _)) = timeouts.iter().find(|(_, secs)| *secs == 0) {
            return Err(ConfigValidationError::InvalidTimeout(*field));
        }

        // Source requests must time out inside the stage budget, or a single
        // hung upstream consumes the whole stage before any fallback runs.
        let stage = self.router.provider_timeout_seconds;
        let source_timeouts = [
            ("catalog.timeout_seconds", self.catalog.timeout_seconds),
            ("academic.timeout_seconds", self.academic.timeout_seconds),
            ("website.timeout_seconds", self.website.timeout_seconds),
        ];
        if let Some((field, _)) = source_timeouts.iter().find(|(_, secs)| *secs >= stage) {
            return Err(ConfigValidationError::TimeoutExceedsStage(*field));
        }

        if self.catalog.limit == 0 {
            return Err(ConfigValidationError::ZeroLimit("catalog.limit"));
        }
        if self.academic.max_results == 0 {
            return Err(ConfigValidationError::ZeroLimit("academic.max_results"));
        }
        if self.website.max_announcements == 0 {
            return Err(ConfigValidationError::ZeroLimit("website.max_announcements"));
        }

        if self.generative.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        Ok(())
    }

    /// Convert into the settings the adapters are built from
    pub fn to_settings(&self) -> AssistantSettings {
        AssistantSettings {
            router: self.router.to_settings(),
            catalog: self.catalog.to_settings(),
            academic: self.academic.to_settings(),
            website: self.website.to_settings(),
            generative: self.generative.to_settings(),
        }
    }
}
