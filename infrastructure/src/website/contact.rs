//! Contact page

use crate::markup::{element_text, selector};
use assistant_application::ProviderError;
use assistant_domain::ContactRecord;
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+90\s*\d{3}\s*\d{3}\s*\d{4}").expect("valid regex"));

const WORKING_HOURS: &str = "Çalışma Saatleri";

/// Parse the contact card from the page's content area.
///
/// Phone numbers are published as images, so they are read from `alt` text.
/// Returns `None` when the content area is missing or holds nothing usable.
pub fn parse_contact(html: &str) -> Result<Option<ContactRecord>, ProviderError> {
    let document = Html::parse_document(html);
    let area = selector("div.dinamic-content.text-left")?;
    let strong = selector("strong")?;
    let span = selector("span")?;
    let image = selector("img[alt]")?;
    let mailto = selector(r#"a[href*="mailto:"]"#)?;

    let Some(area) = document.select(&area).next() else {
        return Ok(None);
    };

    let address = area.select(&strong).next().map(|s| match s.select(&span).next() {
        Some(inner) => element_text(inner),
        None => element_text(s),
    });

    let phone = area
        .select(&image)
        .filter_map(|img| img.value().attr("alt"))
        .map(str::trim)
        .filter(|alt| PHONE.is_match(alt))
        .map(str::to_string)
        .collect();

    let email = area
        .select(&mailto)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|href| href.replace("mailto:", "").trim().to_string());

    let pieces: Vec<&str> = area.text().map(str::trim).filter(|s| !s.is_empty()).collect();
    let working_hours = working_hours(&pieces);

    let contact = ContactRecord {
        address: address.filter(|a| !a.is_empty()),
        phone,
        email: email.filter(|e| !e.is_empty()),
        working_hours,
    };
    Ok((!contact.is_empty()).then_some(contact))
}

/// Text after the "Çalışma Saatleri" label, on the same line or the next one
fn working_hours(pieces: &[&str]) -> Option<String> {
    let index = pieces.iter().position(|p| p.contains(WORKING_HOURS))?;
    let inline = pieces[index]
        .split_once(WORKING_HOURS)
        .map(|(_, rest)| rest.trim_start_matches([':', ' ']).trim())
        .unwrap_or_default();

    let value = if inline.is_empty() {
        pieces.get(index + 1)?.trim_start_matches([':', ' ']).trim()
    } else {
        inline
    };
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div class="dinamic-content text-left">
            <p><strong><span>Batman Üniversitesi Batı Raman Kampüsü, Merkez/Batman</span></strong></p>
            <p><img src="t1.png" alt="+90 488 217 3500"> <img src="logo.png" alt="Logo"></p>
            <p><img src="t2.png" alt=" +904882173501 "></p>
            <p>E-posta: <a href="mailto:kutuphane@example.edu">kutuphane@example.edu</a></p>
            <p><b>Çalışma Saatleri:</b> Pazartesi - Cuma 08:30 - 17:30</p>
        </div>
    </body></html>"#;

    #[test]
    fn test_full_contact_card() {
        let contact = parse_contact(PAGE).unwrap().unwrap();
        assert_eq!(
            contact.address.as_deref(),
            Some("Batman Üniversitesi Batı Raman Kampüsü, Merkez/Batman")
        );
        assert_eq!(contact.phone, vec!["+90 488 217 3500", "+904882173501"]);
        assert_eq!(contact.email.as_deref(), Some("kutuphane@example.edu"));
        assert_eq!(
            contact.working_hours.as_deref(),
            Some("Pazartesi - Cuma 08:30 - 17:30")
        );
    }

    #[test]
    fn test_strong_without_span() {
        let html = r#"<div class="dinamic-content text-left"><strong>Merkez Kampüs</strong></div>"#;
        let contact = parse_contact(html).unwrap().unwrap();
        assert_eq!(contact.address.as_deref(), Some("Merkez Kampüs"));
        assert!(contact.phone.is_empty());
        assert_eq!(contact.email, None);
    }

    #[test]
    fn test_missing_area_or_empty_card() {
        assert_eq!(parse_contact("<div class=\"content\">x</div>").unwrap(), None);
        assert_eq!(
            parse_contact("<div class=\"dinamic-content text-left\"><p>Yakında</p></div>").unwrap(),
            None
        );
    }

    #[test]
    fn test_inline_working_hours() {
        assert_eq!(
            working_hours(&["Adres", "Çalışma Saatleri: 09:00 - 17:00"]).as_deref(),
            Some("09:00 - 17:00")
        );
        assert_eq!(working_hours(&["Çalışma Saatleri"]), None);
    }
}
