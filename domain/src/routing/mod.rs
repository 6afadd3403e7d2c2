//! Fallback chain state.
//!
//! A query walks the chain one stage at a time:
//!
//! ```text
//! TryingCatalog -> TryingAcademic -> TryingSite -> FallingBack -> Done
//! ```
//!
//! A stage that finds records jumps to `Done`. A stage that comes back empty
//! moves to the next one. A stage that faults skips every remaining source and
//! goes to `FallingBack` in error mode.

mod outcome;
mod stage;

pub use outcome::{AnswerSource, RouteOutcome};
pub use stage::RouteStage;
