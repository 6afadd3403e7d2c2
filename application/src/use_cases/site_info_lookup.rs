//! Website information lookup.
//!
//! Classifies a query by keyword and fetches the matching website section.
//! The result has three states, and the router relies on telling them apart:
//! the query was not about the website, it was but the page had nothing, or
//! records were found.

use crate::ports::provider::ProviderError;
use crate::ports::site_info::SiteInfoSource;
use assistant_domain::{Query, RecordSet, SiteInfoKind};
use std::sync::Arc;
use tracing::debug;

/// Result of a website lookup
#[derive(Debug, Clone, PartialEq)]
pub enum SiteInfoOutcome {
    /// No website keyword in the query
    NotApplicable,
    /// Classified, but the section yielded nothing
    Empty(SiteInfoKind),
    /// Classified and records found
    Found(RecordSet),
}

pub struct SiteInfoLookup {
    source: Arc<dyn SiteInfoSource>,
}

impl Clone for SiteInfoLookup {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl SiteInfoLookup {
    pub fn new(source: Arc<dyn SiteInfoSource>) -> Self {
        Self { source }
    }

    /// Classify the query and fetch only the matching section.
    ///
    /// A matched section that comes back empty is reported as
    /// [`SiteInfoOutcome::Empty`]; other sections are not tried.
    pub async fn classify_and_fetch(
        &self,
        query: &Query,
    ) -> Result<SiteInfoOutcome, ProviderError> {
        let Some(kind) = SiteInfoKind::classify(query) else {
            return Ok(SiteInfoOutcome::NotApplicable);
        };
        debug!("Query classified as website {} question", kind);

        let set = match kind {
            SiteInfoKind::Announcements => {
                RecordSet::Announcements(self.source.announcements().await?)
            }
            SiteInfoKind::Staff => RecordSet::Staff(self.source.staff().await?),
            SiteInfoKind::Contact => match self.source.contact().await? {
                Some(contact) => RecordSet::Contact(contact),
                None => return Ok(SiteInfoOutcome::Empty(kind)),
            },
        };

        if set.is_empty() {
            Ok(SiteInfoOutcome::Empty(kind))
        } else {
            Ok(SiteInfoOutcome::Found(set))
        }
    }
}
