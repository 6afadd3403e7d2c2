//! Structured records produced by the informational sources.
//!
//! Each source hands back either a non-empty list of its own record type or
//! nothing at all. Constructors reject records that are missing their
//! identifying field so a half-parsed row never reaches the formatter.

mod academic;
mod catalog;
mod site;

pub use academic::AcademicRecord;
pub use catalog::CatalogRecord;
pub use site::{AnnouncementRecord, ContactRecord, StaffRecord};

/// Trim a required field, rejecting blank values
pub(crate) fn required(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

/// Trim an optional field, collapsing blank values to `None`
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value.and_then(required)
}
