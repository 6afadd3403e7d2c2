//! Domain layer for library-assistant
//!
//! This crate contains the value objects, records and pure logic of the
//! assistant. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Fallback chain
//!
//! A patron's [`Query`] is answered by the first source that has something
//! to say, in a fixed order:
//!
//! 1. **Catalog**: books and holdings ([`CatalogRecord`])
//! 2. **Academic repository**: theses and articles ([`AcademicRecord`])
//! 3. **Website**: announcements, staff, contact ([`SiteInfoKind`])
//! 4. **Generative fallback**: free text from a language model
//!
//! [`RouteStage`] models the walk through that chain.
//!
//! ## Formatting
//!
//! [`ResponseFormatter`] turns a [`RecordSet`] or generated text into the
//! single display string returned to the caller.

pub mod config;
pub mod core;
pub mod format;
pub mod prompt;
pub mod records;
pub mod routing;
pub mod site_info;

// Re-export commonly used types
pub use config::{
    AcademicSettings, AssistantSettings, CatalogSettings, GenerativeSettings, OutputFormat,
    RouterSettings, WebsiteSettings,
};
pub use core::{query::Query, string::truncate_str};
pub use format::{LINE_BREAK, PARAGRAPH_BREAK, RecordSet, ResponseFormatter};
pub use prompt::PromptTemplate;
pub use records::{AcademicRecord, AnnouncementRecord, CatalogRecord, ContactRecord, StaffRecord};
pub use routing::{AnswerSource, RouteOutcome, RouteStage};
pub use site_info::SiteInfoKind;
