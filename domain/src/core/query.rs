//! Query value object

use serde::{Deserialize, Serialize};

/// A library patron's question (Value Object)
///
/// Holds the raw user input exactly as typed. Nothing is trimmed or
/// normalized here; the site-info classifier lower-cases on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query {
    text: String,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the raw query text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased copy used for keyword matching
    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }

    /// True when the query contains nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Query::new(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Query::new(s)
    }
}
