//! Library website port
//!
//! Three independent fetchers, one per website section. Each returns an
//! empty value when the page yields nothing.

use super::provider::ProviderError;
use assistant_domain::{AnnouncementRecord, ContactRecord, StaffRecord};
use async_trait::async_trait;

#[async_trait]
pub trait SiteInfoSource: Send + Sync {
    /// Latest announcements, newest first
    async fn announcements(&self) -> Result<Vec<AnnouncementRecord>, ProviderError>;

    /// Staff profiles
    async fn staff(&self) -> Result<Vec<StaffRecord>, ProviderError>;

    /// The contact card, or `None` when the page could not be read
    async fn contact(&self) -> Result<Option<ContactRecord>, ProviderError>;
}
