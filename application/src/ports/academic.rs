//! Academic repository port

use super::provider::ProviderError;
use assistant_domain::{AcademicRecord, Query};
use async_trait::async_trait;

/// Search over the institutional repository
#[async_trait]
pub trait AcademicProvider: Send + Sync {
    /// Records whose title or creator matches the query
    async fn search(&self, query: &Query) -> Result<Vec<AcademicRecord>, ProviderError>;
}
