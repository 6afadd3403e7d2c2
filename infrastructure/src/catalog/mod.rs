//! YORDAM library catalog adapters
//!
//! - [`YordamCatalogClient`]: `CatalogProvider` over the YORDAM web service
//! - [`StaticTokenSource`]: `TokenSource` backed by config or the environment

mod token;
mod yordam;

pub use token::StaticTokenSource;
pub use yordam::YordamCatalogClient;
