//! Result of routing one query

use crate::format::RecordSet;
use crate::site_info::SiteInfoKind;
use serde::{Deserialize, Serialize};

/// Which source produced the final answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    Catalog,
    Academic,
    SiteInfo(SiteInfoKind),
    /// Generated answer after every structured source came back empty
    Generative,
    /// Generated answer after a source failed
    GenerativeError,
}

impl AnswerSource {
    /// Source for a structured record set
    pub fn for_records(set: &RecordSet) -> Self {
        match set {
            RecordSet::Catalog(_) => AnswerSource::Catalog,
            RecordSet::Academic(_) => AnswerSource::Academic,
            other => other
                .site_info_kind()
                .map(AnswerSource::SiteInfo)
                .unwrap_or(AnswerSource::Generative),
        }
    }
}

impl std::fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerSource::Catalog => f.write_str("catalog"),
            AnswerSource::Academic => f.write_str("academic"),
            AnswerSource::SiteInfo(kind) => write!(f, "site_info:{kind}"),
            AnswerSource::Generative => f.write_str("generative"),
            AnswerSource::GenerativeError => f.write_str("generative_error"),
        }
    }
}

/// The formatted answer together with where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteOutcome {
    pub source: AnswerSource,
    pub response: String,
}

impl RouteOutcome {
    pub fn new(source: AnswerSource, response: impl Into<String>) -> Self {
        Self {
            source,
            response: response.into(),
        }
    }
}
