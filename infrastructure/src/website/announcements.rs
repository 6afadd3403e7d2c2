//! Announcements listing (`/tum-duyurular`)

use super::resolve_link;
use crate::markup::{element_text, selector};
use assistant_application::ProviderError;
use assistant_domain::AnnouncementRecord;
use scraper::Html;

/// Read the newest announcements from the first table on the page.
///
/// The first row is the header; columns are number, date, title. A page
/// without any table means the layout changed and is reported as malformed.
pub fn parse_announcements(
    html: &str,
    base_url: &str,
    limit: usize,
) -> Result<Vec<AnnouncementRecord>, ProviderError> {
    let document = Html::parse_document(html);
    let table = selector("table")?;
    let row = selector("tr")?;
    let cell = selector("td")?;
    let link = selector("a")?;

    let table = document
        .select(&table)
        .next()
        .ok_or_else(|| ProviderError::Malformed("announcements page has no table".to_string()))?;

    let records = table
        .select(&row)
        .skip(1)
        .take(limit)
        .filter_map(|tr| {
            let cols: Vec<_> = tr.select(&cell).collect();
            if cols.len() < 3 {
                return None;
            }
            let anchor = cols[2].select(&link).next();
            let title = anchor.map(element_text).unwrap_or_else(|| element_text(cols[2]));
            let url = anchor
                .and_then(|a| a.value().attr("href"))
                .map(|href| resolve_link(base_url, href))
                .unwrap_or_default();
            AnnouncementRecord::try_new(title, element_text(cols[1]), url)
        })
        .collect();

    Ok(records)
}
