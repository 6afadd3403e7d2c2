//! Keyword classification of website-information questions.
//!
//! Questions about announcements, staff or contact details are answered from
//! the library website instead of the catalog. Matching is a plain
//! case-insensitive substring test against a fixed keyword set per kind; the
//! first kind in [`SiteInfoKind::ALL`] order with a hit wins.

use crate::core::query::Query;
use serde::{Deserialize, Serialize};

/// Which section of the library website a question is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteInfoKind {
    Announcements,
    Staff,
    Contact,
}

impl SiteInfoKind {
    /// Classification order
    pub const ALL: [SiteInfoKind; 3] = [
        SiteInfoKind::Announcements,
        SiteInfoKind::Staff,
        SiteInfoKind::Contact,
    ];

    /// Lower-case keywords that select this kind
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            SiteInfoKind::Announcements => &["duyuru", "duyurular"],
            SiteInfoKind::Staff => &["personel", "çalışan"],
            SiteInfoKind::Contact => &["iletişim", "adres"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SiteInfoKind::Announcements => "announcements",
            SiteInfoKind::Staff => "staff",
            SiteInfoKind::Contact => "contact",
        }
    }

    /// Classify a query, or `None` when it is not a website question
    pub fn classify(query: &Query) -> Option<SiteInfoKind> {
        let lowered = query.lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.keywords().iter().any(|kw| lowered.contains(kw)))
    }
}

impl std::fmt::Display for SiteInfoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
