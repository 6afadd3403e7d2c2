//! Catalog ports
//!
//! The catalog search needs a credential, which comes from its own source.

use super::provider::ProviderError;
use assistant_domain::{CatalogRecord, Query};
use async_trait::async_trait;

/// Access token for the catalog web service
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.chars().take(4).collect();
        write!(f, "Credential({prefix}...)")
    }
}

/// Where catalog credentials come from
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Fetch a usable token
    async fn token(&self) -> Result<Credential, ProviderError>;
}

/// Library catalog search
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search the catalog; an empty list means no match
    async fn search(
        &self,
        query: &Query,
        credential: &Credential,
    ) -> Result<Vec<CatalogRecord>, ProviderError>;
}
