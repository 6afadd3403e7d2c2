//! Administrative staff listing (`/idari-kadro`) and profile pages

use super::resolve_link;
use crate::markup::{element_text, selector};
use assistant_application::ProviderError;
use assistant_domain::StaffRecord;
use regex::Regex;
use scraper::{ElementRef, Html};
use std::sync::LazyLock;

static PROFILE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"pers_id=\d+").expect("valid regex"));

/// Absolute profile URLs linked from the listing, first occurrence order
pub fn parse_profile_links(html: &str, base_url: &str) -> Result<Vec<String>, ProviderError> {
    let document = Html::parse_document(html);
    let anchor = selector("a[href]")?;

    let mut links: Vec<String> = Vec::new();
    for href in document
        .select(&anchor)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| PROFILE_LINK.is_match(href))
    {
        let url = if href.starts_with("http") {
            href.to_string()
        } else {
            resolve_link(base_url, href)
        };
        if !links.contains(&url) {
            links.push(url);
        }
    }
    Ok(links)
}

#[derive(Default)]
struct ProfileFields {
    name: Option<String>,
    title: Option<String>,
    unit: Option<String>,
    phone: Option<String>,
    internal_phone: Option<String>,
    email: Option<String>,
}

impl ProfileFields {
    fn into_record(self) -> Option<StaffRecord> {
        Some(
            StaffRecord::try_new(self.name?)?
                .with_title(self.title)
                .with_unit(self.unit)
                .with_phone(self.phone)
                .with_internal_phone(self.internal_phone)
                .with_email(self.email),
        )
    }
}

/// Parse one profile page; `None` when no name can be found
pub fn parse_profile(html: &str) -> Result<Option<StaffRecord>, ProviderError> {
    let document = Html::parse_document(html);
    let mut fields = ProfileFields::default();

    read_form_table(&document, &mut fields)?;
    if fields.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
        read_label_pairs(&document, &mut fields)?;
    }

    Ok(fields.into_record())
}

/// Key/value rows of the `div.form` table
fn read_form_table(document: &Html, fields: &mut ProfileFields) -> Result<(), ProviderError> {
    let table = selector("div.form table")?;
    let row = selector("tr")?;
    let cell = selector("td")?;
    let mailto = selector(r#"a[href^="mailto:"]"#)?;

    let Some(table) = document.select(&table).next() else {
        return Ok(());
    };

    for tr in table.select(&row) {
        let cols: Vec<_> = tr.select(&cell).collect();
        if cols.len() < 2 {
            continue;
        }
        let key = element_text(cols[0]);
        let key = key.trim_end_matches(':').trim();
        let value = Some(element_text(cols[1]));

        match key {
            "Adı Soyadı" => fields.name = value,
            "Ünvanı" => fields.title = value,
            "Birimi" => fields.unit = value,
            "İş Telefonu" | "Telefon" => fields.phone = value,
            "Dahili Telefon" | "Dahili" => fields.internal_phone = value,
            k if k.contains("E-posta") => {
                fields.email = cols[1]
                    .select(&mailto)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .map(|href| href.trim_start_matches("mailto:").trim().to_string())
                    .or(value);
            }
            _ => {}
        }
    }
    Ok(())
}

/// Alternate layout: `div.pLabel` followed by a sibling `div.pValue`
fn read_label_pairs(document: &Html, fields: &mut ProfileFields) -> Result<(), ProviderError> {
    let label = selector("div.pLabel")?;

    for element in document.select(&label) {
        let text = element_text(element).to_lowercase();
        let value = sibling_value(element).map(element_text);

        if text.contains("adı soyadı") || text.contains("ad soyad") {
            fields.name = value;
        } else if text.contains("ünvan") {
            fields.title = value;
        } else if text.contains("telefon") {
            fields.phone = value;
        } else if text.contains("e-posta") {
            fields.email = value;
        } else if text.contains("oda no") {
            fields.internal_phone = value;
        }
    }
    Ok(())
}

fn sibling_value(label: ElementRef<'_>) -> Option<ElementRef<'_>> {
    label.next_siblings().filter_map(ElementRef::wrap).find(|e| {
        e.value().name() == "div" && e.value().classes().any(|c| c == "pValue")
    })
}
