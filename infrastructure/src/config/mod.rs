//! Configuration file loading for library-assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LIBRARY_ASSISTANT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./library-assistant.toml` or `./.library-assistant.toml`
//! 4. Global: `$XDG_CONFIG_HOME/library-assistant/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAcademicConfig, FileCatalogConfig, FileConfig,
    FileGenerativeConfig, FileOutputConfig, FileRouterConfig, FileWebsiteConfig,
};
pub use loader::ConfigLoader;
