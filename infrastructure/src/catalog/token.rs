//! Static catalog token

use assistant_application::{Credential, ProviderError, TokenSource};
use assistant_domain::CatalogSettings;
use async_trait::async_trait;
use tracing::debug;

/// Token taken from configuration, or from an environment variable.
///
/// The token is handed out as-is; the catalog rejects a bad one by returning
/// nothing, which the router treats as an empty result.
pub struct StaticTokenSource {
    token: Option<String>,
    env_var: String,
}

impl StaticTokenSource {
    pub fn new(token: Option<String>, env_var: impl Into<String>) -> Self {
        Self {
            token,
            env_var: env_var.into(),
        }
    }

    pub fn from_settings(settings: &CatalogSettings) -> Self {
        Self::new(settings.token.clone(), settings.token_env.clone())
    }

    fn resolve(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Credential, ProviderError> {
        if let Some(token) = self.token.as_deref().filter(|t| !t.trim().is_empty()) {
            debug!("Using catalog token from configuration");
            return Ok(Credential::new(token.trim()));
        }

        match lookup(&self.env_var).filter(|t| !t.trim().is_empty()) {
            Some(token) => Ok(Credential::new(token.trim())),
            None => Err(ProviderError::Credential(format!(
                "no catalog token configured and {} is not set",
                self.env_var
            ))),
        }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn token(&self) -> Result<Credential, ProviderError> {
        self.resolve(|name| std::env::var(name).ok())
    }
}
