//! Institutional repository record

use super::{optional, required};
use serde::{Deserialize, Serialize};

/// A thesis, article or report harvested from the academic repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicRecord {
    pub title: String,
    /// First listed creator; empty when the repository has none
    pub creator: String,
    pub date: Option<String>,
    pub identifier: Option<String>,
}

impl AcademicRecord {
    /// Build a record, returning `None` when the title is blank
    pub fn try_new(
        title: impl Into<String>,
        creator: impl Into<String>,
        date: Option<String>,
        identifier: Option<String>,
    ) -> Option<Self> {
        Some(Self {
            title: required(title)?,
            creator: creator.into().trim().to_string(),
            date: optional(date),
            identifier: optional(identifier),
        })
    }
}
