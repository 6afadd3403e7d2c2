//! Library website scraper
//!
//! Implements `SiteInfoSource` by scraping three public pages:
//!
//! | Section | Page | Parser |
//! |---------|------|--------|
//! | Announcements | `{base}/tum-duyurular` | [`parse_announcements`] |
//! | Staff | `{base}/idari-kadro` + one page per profile | [`parse_profile_links`], [`parse_profile`] |
//! | Contact | configurable, `{base}/sayfalar/17995` by default | [`parse_contact`] |
//!
//! A page that cannot be fetched yields an empty section.

mod announcements;
mod contact;
mod staff;

pub use announcements::parse_announcements;
pub use contact::parse_contact;
pub use staff::{parse_profile, parse_profile_links};

use crate::http::{BROWSER_USER_AGENT, build_client, get_text};
use assistant_application::{ProviderError, SiteInfoSource};
use assistant_domain::{AnnouncementRecord, ContactRecord, StaffRecord, WebsiteSettings};
use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, info, warn};
use url::Url;

/// Resolve `href` against `base`, keeping `href` unchanged if either is unusable
pub(crate) fn resolve_link(base: &str, href: &str) -> String {
    Url::parse(base)
        .and_then(|b| b.join(href))
        .map(String::from)
        .unwrap_or_else(|_| href.to_string())
}

pub struct LibraryWebScraper {
    http: reqwest::Client,
    settings: WebsiteSettings,
}

impl LibraryWebScraper {
    pub fn new(settings: &WebsiteSettings) -> reqwest::Result<Self> {
        info!("Website scraper base URL: {}", settings.base_url);
        Ok(Self {
            http: build_client(settings.request_timeout, BROWSER_USER_AGENT)?,
            settings: settings.clone(),
        })
    }

    /// Fetch a page, logging and swallowing failures
    async fn page(&self, url: &str) -> Option<String> {
        debug!("Fetching {}", url);
        match get_text(&self.http, url, &[]).await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Error fetching {}: {}", url, e);
                None
            }
        }
    }
}

#[async_trait]
impl SiteInfoSource for LibraryWebScraper {
    async fn announcements(&self) -> Result<Vec<AnnouncementRecord>, ProviderError> {
        let Some(html) = self.page(&self.settings.announcements_url()).await else {
            return Ok(Vec::new());
        };
        let records = parse_announcements(
            &html,
            &self.settings.base_url,
            self.settings.max_announcements,
        )?;
        info!("Found {} announcements", records.len());
        Ok(records)
    }

    async fn staff(&self) -> Result<Vec<StaffRecord>, ProviderError> {
        let Some(listing) = self.page(&self.settings.staff_url()).await else {
            warn!("Failed to fetch staff listing page");
            return Ok(Vec::new());
        };
        let links = parse_profile_links(&listing, &self.settings.base_url)?;
        info!("Found {} unique staff profile links", links.len());

        let pages = join_all(links.iter().map(|link| self.page(link))).await;

        let mut staff = Vec::new();
        for html in pages.into_iter().flatten() {
            if let Some(record) = parse_profile(&html)? {
                debug!("Processed profile: {}", record.name);
                staff.push(record);
            }
        }
        info!("Processed {} staff profiles", staff.len());
        Ok(staff)
    }

    async fn contact(&self) -> Result<Option<ContactRecord>, ProviderError> {
        let Some(html) = self.page(&self.settings.contact_url()).await else {
            return Ok(None);
        };
        let contact = parse_contact(&html)?;
        if contact.is_none() {
            warn!("Contact content area not found or empty");
        }
        Ok(contact)
    }
}
