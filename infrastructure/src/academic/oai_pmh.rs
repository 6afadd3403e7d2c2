//! OAI-PMH harvester for the university's open archive.
//!
//! OAI-PMH has no search verb, so matching is done client-side: records are
//! listed in `oai_dc` and filtered by keyword until enough are found.

use super::dublin_core::{DublinCore, RecordPage, parse_identify, parse_records, parse_sets};
use crate::http::{LIBRARY_USER_AGENT, build_client, get_text};
use assistant_application::{AcademicProvider, ProviderError};
use assistant_domain::{AcademicRecord, AcademicSettings, Query};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Upper bound on `resumptionToken` pages followed per search
const MAX_PAGES: usize = 10;

pub struct OaiPmhClient {
    http: reqwest::Client,
    endpoints: Vec<String>,
    max_results: usize,
}

impl OaiPmhClient {
    pub fn new(settings: &AcademicSettings) -> reqwest::Result<Self> {
        Ok(Self {
            http: build_client(settings.request_timeout, LIBRARY_USER_AGENT)?,
            endpoints: candidate_endpoints(settings),
            max_results: settings.max_results,
        })
    }

    /// Endpoints probed with `Identify`, in order
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    async fn call(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String, ProviderError> {
        debug!("OAI-PMH {} {:?}", endpoint, params);
        get_text(&self.http, endpoint, params).await
    }

    /// First endpoint that answers `Identify`
    async fn working_endpoint(&self) -> Option<&str> {
        for endpoint in &self.endpoints {
            match self
                .call(endpoint, &[("verb", "Identify")])
                .await
                .and_then(|xml| parse_identify(&xml))
            {
                Ok(name) => {
                    info!("Connected to OAI-PMH endpoint {} ({})", endpoint, name);
                    return Some(endpoint.as_str());
                }
                Err(e) => warn!("OAI-PMH endpoint {} unavailable: {}", endpoint, e),
            }
        }
        None
    }

    async fn list_records(
        &self,
        endpoint: &str,
        set: Option<&str>,
    ) -> Result<RecordPage, ProviderError> {
        let mut params = vec![("verb", "ListRecords"), ("metadataPrefix", "oai_dc")];
        if let Some(set) = set {
            params.push(("set", set));
        }
        let xml = self.call(endpoint, &params).await?;
        parse_records(&xml)
    }

    async fn resume(&self, endpoint: &str, token: &str) -> Result<RecordPage, ProviderError> {
        let xml = self
            .call(endpoint, &[("verb", "ListRecords"), ("resumptionToken", token)])
            .await?;
        parse_records(&xml)
    }

    /// List records, retrying within the first advertised set on failure
    async fn first_page(&self, endpoint: &str) -> Result<RecordPage, ProviderError> {
        match self.list_records(endpoint, None).await {
            Ok(page) => Ok(page),
            Err(e) => {
                warn!("ListRecords failed ({}), trying the first set", e);
                let xml = self.call(endpoint, &[("verb", "ListSets")]).await?;
                let set = parse_sets(&xml)?
                    .into_iter()
                    .next()
                    .ok_or_else(|| ProviderError::Malformed("repository has no sets".to_string()))?;
                debug!("Listing records in set {}", set);
                self.list_records(endpoint, Some(&set)).await
            }
        }
    }

    async fn harvest(
        &self,
        endpoint: &str,
        keyword: &str,
    ) -> Result<Vec<DublinCore>, ProviderError> {
        let mut page = self.first_page(endpoint).await?;
        let mut matches = Vec::new();

        for page_no in 1..=MAX_PAGES {
            for record in page.records {
                if record.matches(keyword) {
                    matches.push(record);
                    if matches.len() >= self.max_results {
                        return Ok(matches);
                    }
                }
            }

            let Some(token) = page.resumption_token else {
                break;
            };
            if page_no == MAX_PAGES {
                debug!("Stopping after {} pages", MAX_PAGES);
                break;
            }
            page = match self.resume(endpoint, &token).await {
                Ok(next) => next,
                Err(e) => {
                    warn!("Could not fetch next OAI-PMH page: {}", e);
                    break;
                }
            };
        }

        Ok(matches)
    }
}

/// Configured endpoint, its common variants, then the fallbacks, without duplicates
fn candidate_endpoints(settings: &AcademicSettings) -> Vec<String> {
    let base = settings.endpoint.trim_end_matches('/');
    let mut candidates = vec![settings.endpoint.clone(), base.to_string()];
    if !base.ends_with("/request") {
        candidates.push(format!("{}/request", base));
    }
    candidates.extend(settings.fallback_endpoints.iter().cloned());

    let mut unique: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !candidate.is_empty() && !unique.contains(&candidate) {
            unique.push(candidate);
        }
    }
    unique
}

fn to_record(dc: DublinCore) -> Option<AcademicRecord> {
    AcademicRecord::try_new(
        dc.title,
        dc.creator,
        Some(dc.date),
        Some(dc.identifier),
    )
}

#[async_trait]
impl AcademicProvider for OaiPmhClient {
    async fn search(&self, query: &Query) -> Result<Vec<AcademicRecord>, ProviderError> {
        if query.is_blank() {
            return Ok(Vec::new());
        }

        let Some(endpoint) = self.working_endpoint().await else {
            warn!("No OAI-PMH endpoint reachable");
            return Ok(Vec::new());
        };

        let keyword = query.lowercase();
        match self.harvest(endpoint, keyword.trim()).await {
            Ok(found) => {
                info!("Academic repository returned {} records", found.len());
                Ok(found.into_iter().filter_map(to_record).collect())
            }
            Err(e) => {
                warn!("OAI-PMH harvest failed: {}", e);
                Ok(Vec::new())
            }
        }
    }
}
