//! Hand-written port doubles shared by the use-case tests.

use crate::ports::academic::AcademicProvider;
use crate::ports::catalog::{CatalogProvider, Credential, TokenSource};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::{RouteProgressNotifier, StageStatus};
use crate::ports::provider::ProviderError;
use crate::ports::site_info::SiteInfoSource;
use assistant_domain::{
    AcademicRecord, AnnouncementRecord, CatalogRecord, ContactRecord, Query, RouteStage,
    StaffRecord,
};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

pub fn catalog_record(title: &str) -> CatalogRecord {
    CatalogRecord::try_new(title, Some("2020".to_string())).unwrap()
}

pub fn academic_record(title: &str) -> AcademicRecord {
    AcademicRecord::try_new(title, "Yazar, A.", Some("2022".to_string()), None).unwrap()
}

pub fn announcement(title: &str) -> AnnouncementRecord {
    AnnouncementRecord::try_new(title, "01.03.2024", "https://example.edu/duyuru/1").unwrap()
}

pub fn staff(name: &str) -> StaffRecord {
    StaffRecord::try_new(name).unwrap()
}

/// Scripted behaviour of a structured source
#[derive(Clone)]
pub enum Script<T> {
    Records(Vec<T>),
    Fail,
    /// Sleep before answering with an empty list
    Hang(Duration),
}

/// Records every call as "name:query" so tests can assert on the order
#[derive(Default)]
pub struct CallLog {
    calls: Mutex<Vec<String>>,
}

impl CallLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.calls.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

pub struct ScriptedCatalog {
    pub script: Script<CatalogRecord>,
    pub log: CallLog,
}

impl ScriptedCatalog {
    pub fn new(script: Script<CatalogRecord>) -> Self {
        Self {
            script,
            log: CallLog::default(),
        }
    }
}

#[async_trait]
impl CatalogProvider for ScriptedCatalog {
    async fn search(
        &self,
        query: &Query,
        _credential: &Credential,
    ) -> Result<Vec<CatalogRecord>, ProviderError> {
        self.log.push(format!("catalog:{}", query));
        run_script(&self.script).await
    }
}

pub struct ScriptedAcademic {
    pub script: Script<AcademicRecord>,
    pub log: CallLog,
}

impl ScriptedAcademic {
    pub fn new(script: Script<AcademicRecord>) -> Self {
        Self {
            script,
            log: CallLog::default(),
        }
    }
}

#[async_trait]
impl AcademicProvider for ScriptedAcademic {
    async fn search(&self, query: &Query) -> Result<Vec<AcademicRecord>, ProviderError> {
        self.log.push(format!("academic:{}", query));
        run_script(&self.script).await
    }
}

async fn run_script<T: Clone>(script: &Script<T>) -> Result<Vec<T>, ProviderError> {
    match script {
        Script::Records(records) => Ok(records.clone()),
        Script::Fail => Err(ProviderError::Transport("connection reset".to_string())),
        Script::Hang(duration) => {
            tokio::time::sleep(*duration).await;
            Ok(vec![])
        }
    }
}

/// Token source that either hands out a fixed token or fails
pub struct FixedToken(pub Option<&'static str>);

#[async_trait]
impl TokenSource for FixedToken {
    async fn token(&self) -> Result<Credential, ProviderError> {
        self.0
            .map(Credential::new)
            .ok_or_else(|| ProviderError::Credential("no token".to_string()))
    }
}

#[derive(Default)]
pub struct ScriptedSite {
    pub announcements: Vec<AnnouncementRecord>,
    pub staff: Vec<StaffRecord>,
    pub contact: Option<ContactRecord>,
    pub fail: bool,
    pub log: CallLog,
}

impl ScriptedSite {
    pub fn calls(&self) -> Vec<String> {
        self.log.entries()
    }

    fn check(&self) -> Result<(), ProviderError> {
        if self.fail {
            Err(ProviderError::Malformed("no table on page".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SiteInfoSource for ScriptedSite {
    async fn announcements(&self) -> Result<Vec<AnnouncementRecord>, ProviderError> {
        self.log.push("announcements");
        self.check()?;
        Ok(self.announcements.clone())
    }

    async fn staff(&self) -> Result<Vec<StaffRecord>, ProviderError> {
        self.log.push("staff");
        self.check()?;
        Ok(self.staff.clone())
    }

    async fn contact(&self) -> Result<Option<ContactRecord>, ProviderError> {
        self.log.push("contact");
        self.check()?;
        Ok(self.contact.clone())
    }
}

/// Gateway that records requests and answers with a fixed reply
pub struct RecordingGateway {
    reply: Option<String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl RecordingGateway {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for RecordingGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply
            .clone()
            .ok_or_else(|| GatewayError::RequestFailed("quota exceeded".to_string()))
    }
}

/// Progress notifier that keeps every event
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<(RouteStage, Option<StageStatus>)>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<(RouteStage, Option<StageStatus>)> {
        self.events.lock().unwrap().clone()
    }
}

impl RouteProgressNotifier for RecordingProgress {
    fn on_stage_start(&self, stage: RouteStage) {
        self.events.lock().unwrap().push((stage, None));
    }

    fn on_stage_complete(&self, stage: RouteStage, status: StageStatus) {
        self.events.lock().unwrap().push((stage, Some(status)));
    }
}
