//! Institutional repository adapters
//!
//! - [`OaiPmhClient`]: `AcademicProvider` harvesting Dublin Core over OAI-PMH

mod dublin_core;
mod oai_pmh;

pub use oai_pmh::OaiPmhClient;
