//! Response formatting.
//!
//! Every answer leaves the assistant as a single string in which line breaks
//! are written as the [`LINE_BREAK`] token, so the same text can be dropped
//! into a web page or converted to newlines for a terminal.
//!
//! - [`ResponseFormatter::format`] renders a [`RecordSet`] from one of the
//!   structured sources as a header plus a numbered list.
//! - [`ResponseFormatter::format_generative`] re-flows free model text into
//!   the same numbered style when it looks like a list.

mod generative;
mod records;

use crate::records::{
    AcademicRecord, AnnouncementRecord, CatalogRecord, ContactRecord, StaffRecord,
};
use crate::site_info::SiteInfoKind;
use serde::{Deserialize, Serialize};

/// Line-break token embedded in every formatted response
pub const LINE_BREAK: &str = "<br/>";

/// Separator placed between re-flowed paragraphs of generated text
pub const PARAGRAPH_BREAK: &str = "<br/><br/>";

/// The records returned by whichever source answered a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "records", rename_all = "snake_case")]
pub enum RecordSet {
    Catalog(Vec<CatalogRecord>),
    Academic(Vec<AcademicRecord>),
    Announcements(Vec<AnnouncementRecord>),
    Staff(Vec<StaffRecord>),
    Contact(ContactRecord),
}

impl RecordSet {
    /// Number of entries that would be rendered
    pub fn len(&self) -> usize {
        match self {
            RecordSet::Catalog(records) => records.len(),
            RecordSet::Academic(records) => records.len(),
            RecordSet::Announcements(records) => records.len(),
            RecordSet::Staff(records) => records.len(),
            RecordSet::Contact(contact) => records::contact_items(contact).len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The website section this set came from, if any
    pub fn site_info_kind(&self) -> Option<SiteInfoKind> {
        match self {
            RecordSet::Announcements(_) => Some(SiteInfoKind::Announcements),
            RecordSet::Staff(_) => Some(SiteInfoKind::Staff),
            RecordSet::Contact(_) => Some(SiteInfoKind::Contact),
            RecordSet::Catalog(_) | RecordSet::Academic(_) => None,
        }
    }
}

/// Renders record sets and generated text into display strings
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Render a record set with the template for its kind
    pub fn format(set: &RecordSet) -> String {
        match set {
            RecordSet::Catalog(records) => records::format_catalog(records),
            RecordSet::Academic(records) => records::format_academic(records),
            RecordSet::Announcements(records) => records::format_announcements(records),
            RecordSet::Staff(records) => records::format_staff(records),
            RecordSet::Contact(contact) => records::format_contact(contact),
        }
    }

    /// Re-flow model output into numbered lists where it has list structure.
    ///
    /// Best effort only; any input, including the empty string, produces
    /// output.
    pub fn format_generative(text: &str) -> String {
        generative::reflow(text)
    }
}
