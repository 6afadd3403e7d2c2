//! OAI-PMH response parsing.
//!
//! Responses are read with the HTML parser: prefixed element names such as
//! `dc:title` survive as lower-cased local names and are matched with escaped
//! selectors (`dc\:title`). Self-closing elements are expanded first because
//! the HTML tokenizer does not honour `/>` on unknown tags.

use crate::markup::{element_text, first_text, selector};
use assistant_application::ProviderError;
use regex::Regex;
use scraper::Html;
use std::borrow::Cow;
use std::sync::LazyLock;

static EMPTY_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([A-Za-z_][\w:.-]*)((?:\s[^<>]*?)?)/>").expect("valid regex")
});

/// First Dublin Core values of one harvested record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DublinCore {
    pub title: String,
    pub creator: String,
    pub date: String,
    pub identifier: String,
}

impl DublinCore {
    /// Case-insensitive substring match on title or creator.
    ///
    /// Records without a title never match.
    pub fn matches(&self, keyword_lower: &str) -> bool {
        !self.title.is_empty()
            && (self.title.to_lowercase().contains(keyword_lower)
                || self.creator.to_lowercase().contains(keyword_lower))
    }
}

/// One page of a `ListRecords` response
#[derive(Debug, Default)]
pub struct RecordPage {
    pub records: Vec<DublinCore>,
    pub resumption_token: Option<String>,
}

fn expand_empty_elements(xml: &str) -> Cow<'_, str> {
    EMPTY_ELEMENT.replace_all(xml, "<$1$2></$1>")
}

fn parse(xml: &str) -> Result<Html, ProviderError> {
    let document = Html::parse_document(&expand_empty_elements(xml));
    let error = selector("error")?;
    if let Some(element) = document.select(&error).next() {
        let code = element.value().attr("code").unwrap_or("unknown");
        return Err(ProviderError::Malformed(format!(
            "OAI-PMH error {}: {}",
            code,
            element_text(element)
        )));
    }
    Ok(document)
}

/// Parse an `Identify` response, returning the repository name
pub fn parse_identify(xml: &str) -> Result<String, ProviderError> {
    let document = parse(xml)?;
    let identify = selector("identify")?;
    let name = selector("repositoryname")?;
    let element = document
        .select(&identify)
        .next()
        .ok_or_else(|| ProviderError::Malformed("not an Identify response".to_string()))?;
    Ok(first_text(element, &name).unwrap_or_default())
}

/// Parse a `ListRecords` response
pub fn parse_records(xml: &str) -> Result<RecordPage, ProviderError> {
    let document = parse(xml)?;
    let list = selector("listrecords")?;
    let record = selector("record")?;
    let title = selector(r"dc\:title")?;
    let creator = selector(r"dc\:creator")?;
    let date = selector(r"dc\:date")?;
    let identifier = selector(r"dc\:identifier")?;
    let token = selector("resumptiontoken")?;

    let list = document
        .select(&list)
        .next()
        .ok_or_else(|| ProviderError::Malformed("not a ListRecords response".to_string()))?;

    let records = list
        .select(&record)
        .map(|r| DublinCore {
            title: first_text(r, &title).unwrap_or_default(),
            creator: first_text(r, &creator).unwrap_or_default(),
            date: first_text(r, &date).unwrap_or_default(),
            identifier: first_text(r, &identifier).unwrap_or_default(),
        })
        .collect();

    Ok(RecordPage {
        records,
        resumption_token: first_text(list, &token),
    })
}

/// Parse a `ListSets` response into set specs
pub fn parse_sets(xml: &str) -> Result<Vec<String>, ProviderError> {
    let document = parse(xml)?;
    let spec = selector("setspec")?;
    Ok(document
        .select(&spec)
        .map(element_text)
        .filter(|s| !s.is_empty())
        .collect())
}
