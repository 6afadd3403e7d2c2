//! Route Query use case
//!
//! Runs a patron's question down the fallback chain and returns the first
//! answer. Stages are tried strictly one after another:
//!
//! 1. Catalog search (after obtaining a credential)
//! 2. Academic repository search
//! 3. Website lookup (announcements / staff / contact)
//! 4. Generative fallback
//!
//! An empty stage advances to the next one. A stage that fails or overruns
//! its time budget ends the chain: the remaining stages are skipped and the
//! generative fallback answers in error mode.

use crate::ports::academic::AcademicProvider;
use crate::ports::catalog::{CatalogProvider, TokenSource};
use crate::ports::progress::{NoProgress, RouteProgressNotifier, StageStatus};
use crate::ports::provider::ProviderError;
use crate::ports::site_info::SiteInfoSource;
use crate::use_cases::generative_fallback::GenerativeFallback;
use crate::use_cases::site_info_lookup::{SiteInfoLookup, SiteInfoOutcome};
use assistant_domain::{
    AnswerSource, Query, RecordSet, ResponseFormatter, RouteOutcome, RouteStage, truncate_str,
};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Why the chain was abandoned
#[derive(Error, Debug)]
pub enum RouteFault {
    #[error("{stage} source failed: {error}")]
    Provider {
        stage: RouteStage,
        #[source]
        error: ProviderError,
    },

    #[error("{stage} source timed out after {timeout:?}")]
    Timeout { stage: RouteStage, timeout: Duration },
}

/// The structured sources, in chain order
#[derive(Clone)]
pub struct StructuredSources {
    pub token_source: Arc<dyn TokenSource>,
    pub catalog: Arc<dyn CatalogProvider>,
    pub academic: Arc<dyn AcademicProvider>,
    pub site_info: Arc<dyn SiteInfoSource>,
}

/// What the caller of `handle_query` receives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
}

/// What a structured stage produced
enum StageResult {
    Found(RecordSet),
    Empty,
    NotApplicable,
}

impl StageResult {
    fn from_records(set: RecordSet) -> Self {
        if set.is_empty() {
            StageResult::Empty
        } else {
            StageResult::Found(set)
        }
    }

    fn status(&self) -> StageStatus {
        match self {
            StageResult::Found(set) => StageStatus::Found(set.len()),
            StageResult::Empty => StageStatus::Empty,
            StageResult::NotApplicable => StageStatus::NotApplicable,
        }
    }
}

/// Use case for answering a query through the fallback chain
pub struct RouteQueryUseCase {
    sources: StructuredSources,
    site_info: SiteInfoLookup,
    fallback: GenerativeFallback,
    provider_timeout: Duration,
}

impl Clone for RouteQueryUseCase {
    fn clone(&self) -> Self {
        Self {
            sources: self.sources.clone(),
            site_info: self.site_info.clone(),
            fallback: self.fallback.clone(),
            provider_timeout: self.provider_timeout,
        }
    }
}

impl RouteQueryUseCase {
    pub fn new(sources: StructuredSources, fallback: GenerativeFallback) -> Self {
        Self {
            site_info: SiteInfoLookup::new(sources.site_info.clone()),
            sources,
            fallback,
            provider_timeout: Duration::from_secs(10),
        }
    }

    /// Bound each source call to `timeout`
    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    /// Answer a raw query string.
    ///
    /// Never fails: every fault ends up as generated text or an apology.
    pub async fn handle_query(&self, query: &str) -> QueryResponse {
        let outcome = self.route(&Query::new(query)).await;
        QueryResponse {
            response: outcome.response,
        }
    }

    /// Route with default (no-op) progress
    pub async fn route(&self, query: &Query) -> RouteOutcome {
        self.route_with_progress(query, &NoProgress).await
    }

    /// Route with progress callbacks
    pub async fn route_with_progress(
        &self,
        query: &Query,
        progress: &dyn RouteProgressNotifier,
    ) -> RouteOutcome {
        info!("Routing query: {}", truncate_str(query.text(), 100));

        let mut stage = RouteStage::start();
        while stage.is_structured() {
            progress.on_stage_start(stage);

            match self.attempt(stage, query).await {
                Ok(StageResult::Found(set)) => {
                    progress.on_stage_complete(stage, StageStatus::Found(set.len()));
                    info!("Answered from {} ({} entries)", stage, set.len());
                    let outcome = RouteOutcome::new(
                        AnswerSource::for_records(&set),
                        ResponseFormatter::format(&set),
                    );
                    progress.on_route_complete(outcome.source);
                    return outcome;
                }
                Ok(result) => {
                    progress.on_stage_complete(stage, result.status());
                    debug!("{} stage had no answer", stage);
                    stage = stage.on_empty();
                }
                Err(fault) => {
                    progress.on_stage_complete(stage, StageStatus::Fault);
                    error!("Abandoning source chain: {}", fault);
                    return self.fall_back(query, true, progress).await;
                }
            }
        }

        self.fall_back(query, false, progress).await
    }

    async fn fall_back(
        &self,
        query: &Query,
        is_error: bool,
        progress: &dyn RouteProgressNotifier,
    ) -> RouteOutcome {
        progress.on_stage_start(RouteStage::FallingBack);
        let response = self.fallback.ask(query, is_error).await;
        let source = if is_error {
            AnswerSource::GenerativeError
        } else {
            AnswerSource::Generative
        };
        progress.on_route_complete(source);
        RouteOutcome::new(source, response)
    }

    /// Run one structured stage under the per-call time budget
    async fn attempt(&self, stage: RouteStage, query: &Query) -> Result<StageResult, RouteFault> {
        match stage {
            RouteStage::TryingCatalog => self.bounded(stage, self.search_catalog(query)).await,
            RouteStage::TryingAcademic => self.bounded(stage, self.search_academic(query)).await,
            RouteStage::TryingSite => self.bounded(stage, self.lookup_site(query)).await,
            RouteStage::FallingBack | RouteStage::Done => Ok(StageResult::NotApplicable),
        }
    }

    async fn bounded<F>(&self, stage: RouteStage, call: F) -> Result<StageResult, RouteFault>
    where
        F: Future<Output = Result<StageResult, ProviderError>>,
    {
        match tokio::time::timeout(self.provider_timeout, call).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(error)) => Err(RouteFault::Provider { stage, error }),
            Err(_) => Err(RouteFault::Timeout {
                stage,
                timeout: self.provider_timeout,
            }),
        }
    }

    async fn search_catalog(&self, query: &Query) -> Result<StageResult, ProviderError> {
        let credential = match self.sources.token_source.token().await {
            Ok(credential) => credential,
            Err(e) => {
                warn!("Catalog token unavailable, skipping catalog: {}", e);
                return Ok(StageResult::Empty);
            }
        };
        let records = self.sources.catalog.search(query, &credential).await?;
        Ok(StageResult::from_records(RecordSet::Catalog(records)))
    }

    async fn search_academic(&self, query: &Query) -> Result<StageResult, ProviderError> {
        let records = self.sources.academic.search(query).await?;
        Ok(StageResult::from_records(RecordSet::Academic(records)))
    }

    async fn lookup_site(&self, query: &Query) -> Result<StageResult, ProviderError> {
        Ok(match self.site_info.classify_and_fetch(query).await? {
            SiteInfoOutcome::Found(set) => StageResult::Found(set),
            SiteInfoOutcome::Empty(kind) => {
                debug!("Website {} section was empty", kind);
                StageResult::Empty
            }
            SiteInfoOutcome::NotApplicable => StageResult::NotApplicable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_doubles::{
        FixedToken, RecordingGateway, RecordingProgress, Script, ScriptedAcademic,
        ScriptedCatalog, ScriptedSite, academic_record, announcement, catalog_record,
    };
    use assistant_domain::{PromptTemplate, SiteInfoKind};

    struct Harness {
        catalog: Arc<ScriptedCatalog>,
        academic: Arc<ScriptedAcademic>,
        site: Arc<ScriptedSite>,
        gateway: Arc<RecordingGateway>,
        use_case: RouteQueryUseCase,
    }

    impl Harness {
        fn new(
            catalog: Script<assistant_domain::CatalogRecord>,
            academic: Script<assistant_domain::AcademicRecord>,
            site: ScriptedSite,
            gateway: RecordingGateway,
        ) -> Self {
            Self::with_token(Some("token-123"), catalog, academic, site, gateway)
        }

        fn with_token(
            token: Option<&'static str>,
            catalog: Script<assistant_domain::CatalogRecord>,
            academic: Script<assistant_domain::AcademicRecord>,
            site: ScriptedSite,
            gateway: RecordingGateway,
        ) -> Self {
            let catalog = Arc::new(ScriptedCatalog::new(catalog));
            let academic = Arc::new(ScriptedAcademic::new(academic));
            let site = Arc::new(site);
            let gateway = Arc::new(gateway);
            let sources = StructuredSources {
                token_source: Arc::new(FixedToken(token)),
                catalog: catalog.clone(),
                academic: academic.clone(),
                site_info: site.clone(),
            };
            let use_case = RouteQueryUseCase::new(sources, GenerativeFallback::new(gateway.clone()))
                .with_provider_timeout(Duration::from_millis(50));
            Self {
                catalog,
                academic,
                site,
                gateway,
                use_case,
            }
        }
    }

    fn empty<T>() -> Script<T> {
        Script::Records(vec![])
    }

    /// What the error-mode fallback alone would answer
    async fn error_mode_answer(query: &str, reply: &str) -> String {
        GenerativeFallback::new(Arc::new(RecordingGateway::replying(reply)))
            .ask(&Query::new(query), true)
            .await
    }

    #[tokio::test]
    async fn test_catalog_hit_is_formatted_in_order() {
        let h = Harness::new(
            Script::Records(vec![
                catalog_record("Nutuk"),
                catalog_record("Çalıkuşu"),
                catalog_record("Sinekli Bakkal"),
            ]),
            Script::Records(vec![academic_record("unused")]),
            ScriptedSite::default(),
            RecordingGateway::replying("unused"),
        );

        let outcome = h.use_case.route(&Query::new("roman")).await;

        assert_eq!(outcome.source, AnswerSource::Catalog);
        assert!(outcome
            .response
            .starts_with("Kütüphane kataloğunda şu kaynakları buldum:"));
        let first = outcome.response.find("1. 📚 Nutuk").unwrap();
        let second = outcome.response.find("2. 📚 Çalıkuşu").unwrap();
        let third = outcome.response.find("3. 📚 Sinekli Bakkal").unwrap();
        assert!(first < second && second < third);
        assert!(!outcome.response.contains("4. "));
        assert!(h.academic.log.entries().is_empty());
        assert!(h.gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn test_empty_catalog_advances_to_academic() {
        let h = Harness::new(
            empty(),
            Script::Records(vec![academic_record("Batman Petrol Havzası")]),
            ScriptedSite::default(),
            RecordingGateway::replying("unused"),
        );

        let outcome = h.use_case.route(&Query::new("petrol")).await;

        assert_eq!(outcome.source, AnswerSource::Academic);
        assert!(outcome.response.contains("1. 📄 Batman Petrol Havzası"));
        assert_eq!(h.catalog.log.entries(), vec!["catalog:petrol"]);
        assert_eq!(h.academic.log.entries(), vec!["academic:petrol"]);
        assert!(h.site.calls().is_empty());
    }

    #[tokio::test]
    async fn test_site_info_answers_after_empty_searches() {
        let h = Harness::new(
            empty(),
            empty(),
            ScriptedSite {
                announcements: vec![announcement("Yaz dönemi çalışma saatleri")],
                ..Default::default()
            },
            RecordingGateway::replying("unused"),
        );

        let outcome = h.use_case.route(&Query::new("son duyurular")).await;

        assert_eq!(
            outcome.source,
            AnswerSource::SiteInfo(SiteInfoKind::Announcements)
        );
        assert!(outcome.response.contains("1. 📢 Yaz dönemi çalışma saatleri"));
        assert!(h.gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn test_unclassified_query_reaches_generative_fallback() {
        let raw = "Kütüphane hafta içi açıktır. Hafta sonu kapalıdır.";
        let h = Harness::new(
            empty(),
            empty(),
            ScriptedSite::default(),
            RecordingGateway::replying(raw),
        );

        let outcome = h.use_case.route(&Query::new("ne zaman açık")).await;

        assert_eq!(outcome.source, AnswerSource::Generative);
        assert_eq!(outcome.response, ResponseFormatter::format_generative(raw));
        let requests = h.gateway.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].system_prompt, PromptTemplate::answer_system());
        assert_eq!(requests[0].user_prompt, "ne zaman açık");
    }

    #[tokio::test]
    async fn test_matched_but_empty_site_goes_to_regular_fallback() {
        let h = Harness::new(
            empty(),
            empty(),
            ScriptedSite::default(),
            RecordingGateway::replying("Personel listesine ulaşılamadı"),
        );

        let outcome = h.use_case.route(&Query::new("personel listesi")).await;

        assert_eq!(outcome.source, AnswerSource::Generative);
        assert_eq!(h.site.calls(), vec!["staff"]);
        assert_eq!(
            h.gateway.requests()[0].system_prompt,
            PromptTemplate::answer_system()
        );
    }

    #[tokio::test]
    async fn test_catalog_fault_skips_remaining_sources() {
        let reply = "Bir sorun oluştu, danışma masasına başvurabilirsiniz.";
        let h = Harness::new(
            Script::Fail,
            Script::Records(vec![academic_record("should not be shown")]),
            ScriptedSite {
                announcements: vec![announcement("should not be shown")],
                ..Default::default()
            },
            RecordingGateway::replying(reply),
        );

        let outcome = h.use_case.route(&Query::new("duyuru")).await;

        assert_eq!(outcome.source, AnswerSource::GenerativeError);
        assert_eq!(outcome.response, error_mode_answer("duyuru", reply).await);
        assert!(!outcome.response.contains("should not be shown"));
        assert!(h.academic.log.entries().is_empty());
        assert!(h.site.calls().is_empty());

        let requests = h.gateway.requests();
        assert_eq!(requests[0].system_prompt, PromptTemplate::error_system());
        assert_eq!(requests[0].user_prompt, "Kullanıcının sorusu: duyuru");
    }

    #[tokio::test]
    async fn test_academic_fault_after_empty_catalog() {
        let h = Harness::new(
            empty(),
            Script::Fail,
            ScriptedSite {
                announcements: vec![announcement("should not be shown")],
                ..Default::default()
            },
            RecordingGateway::replying("Özür dileriz"),
        );

        let outcome = h.use_case.route(&Query::new("duyuru")).await;

        assert_eq!(outcome.source, AnswerSource::GenerativeError);
        assert_eq!(outcome.response, "Özür dileriz");
        assert!(h.site.calls().is_empty());
    }

    #[tokio::test]
    async fn test_site_fault_uses_error_fallback() {
        let h = Harness::new(
            empty(),
            empty(),
            ScriptedSite {
                fail: true,
                ..Default::default()
            },
            RecordingGateway::replying("Özür dileriz"),
        );

        let outcome = h.use_case.route(&Query::new("duyurular")).await;

        assert_eq!(outcome.source, AnswerSource::GenerativeError);
    }

    #[tokio::test]
    async fn test_timeout_is_treated_as_fault() {
        let h = Harness::new(
            Script::Hang(Duration::from_secs(5)),
            Script::Records(vec![academic_record("should not be shown")]),
            ScriptedSite::default(),
            RecordingGateway::replying("Geç kaldık"),
        );

        let outcome = h.use_case.route(&Query::new("tez")).await;

        assert_eq!(outcome.source, AnswerSource::GenerativeError);
        assert!(h.academic.log.entries().is_empty());
    }

    #[tokio::test]
    async fn test_missing_token_skips_catalog_only() {
        let h = Harness::with_token(
            None,
            Script::Records(vec![catalog_record("should not be shown")]),
            Script::Records(vec![academic_record("Tez")]),
            ScriptedSite::default(),
            RecordingGateway::replying("unused"),
        );

        let outcome = h.use_case.route(&Query::new("tez")).await;

        assert_eq!(outcome.source, AnswerSource::Academic);
        assert!(h.catalog.log.entries().is_empty());
    }

    #[tokio::test]
    async fn test_fallback_failure_in_error_mode_is_apology() {
        let h = Harness::new(
            Script::Fail,
            empty(),
            ScriptedSite::default(),
            RecordingGateway::failing(),
        );

        let response = h.use_case.handle_query("kitap").await;

        assert_eq!(response.response, PromptTemplate::apology());
    }

    #[tokio::test]
    async fn test_handle_query_serializes_as_response_object() {
        let h = Harness::new(
            empty(),
            empty(),
            ScriptedSite::default(),
            RecordingGateway::replying("Merhaba"),
        );

        let response = h.use_case.handle_query("selam").await;

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "response": "Merhaba" }));
    }

    #[tokio::test]
    async fn test_progress_reports_each_stage() {
        let h = Harness::new(
            empty(),
            empty(),
            ScriptedSite::default(),
            RecordingGateway::replying("ok"),
        );
        let progress = RecordingProgress::default();

        h.use_case
            .route_with_progress(&Query::new("soru"), &progress)
            .await;

        assert_eq!(
            progress.events(),
            vec![
                (RouteStage::TryingCatalog, None),
                (RouteStage::TryingCatalog, Some(StageStatus::Empty)),
                (RouteStage::TryingAcademic, None),
                (RouteStage::TryingAcademic, Some(StageStatus::Empty)),
                (RouteStage::TryingSite, None),
                (RouteStage::TryingSite, Some(StageStatus::NotApplicable)),
                (RouteStage::FallingBack, None),
            ]
        );
    }
}
