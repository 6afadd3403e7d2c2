//! Progress notification port
//!
//! Defines the interface for reporting where a query is in the fallback chain.

use assistant_domain::{AnswerSource, RouteStage};

/// What a stage produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    /// The stage answered with this many entries
    Found(usize),
    /// The source ran and had nothing
    Empty,
    /// The website stage did not recognise the query
    NotApplicable,
    /// The source failed or timed out
    Fault,
}

/// Callback for progress updates while routing a query
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain log lines, etc.)
pub trait RouteProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: RouteStage);

    /// Called when a structured stage finishes
    fn on_stage_complete(&self, stage: RouteStage, status: StageStatus);

    /// Called once the answer is ready
    fn on_route_complete(&self, _source: AnswerSource) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RouteProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: RouteStage) {}
    fn on_stage_complete(&self, _stage: RouteStage, _status: StageStatus) {}
}
