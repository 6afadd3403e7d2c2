//! Library catalog record

use super::{optional, required};
use serde::{Deserialize, Serialize};

/// A book or other holding found in the library catalog.
///
/// The catalog never reports authors reliably, so only the title and the
/// publication year are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub title: String,
    pub year: Option<String>,
}

impl CatalogRecord {
    /// Build a record, returning `None` when the title is blank
    pub fn try_new(title: impl Into<String>, year: Option<String>) -> Option<Self> {
        Some(Self {
            title: required(title)?,
            year: optional(year),
        })
    }
}
