//! Infrastructure layer for library-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.
//!
//! | Adapter | Port | Upstream |
//! |---------|------|----------|
//! | [`StaticTokenSource`] | `TokenSource` | config / environment |
//! | [`YordamCatalogClient`] | `CatalogProvider` | YORDAM web service (JSON) |
//! | [`OaiPmhClient`] | `AcademicProvider` | OAI-PMH repository (XML) |
//! | [`LibraryWebScraper`] | `SiteInfoSource` | library website (HTML) |
//! | [`OpenAiGateway`] | `LlmGateway` | OpenAI-compatible chat completions |

pub mod academic;
pub mod catalog;
pub mod config;
pub mod generative;
pub mod website;

mod http;
mod markup;

// Re-export commonly used types
pub use academic::OaiPmhClient;
pub use catalog::{StaticTokenSource, YordamCatalogClient};
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig};
pub use generative::OpenAiGateway;
pub use website::LibraryWebScraper;
