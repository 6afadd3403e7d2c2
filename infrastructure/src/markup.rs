//! Small helpers over `scraper` shared by the HTML and OAI-PMH parsers.

use assistant_application::ProviderError;
use scraper::{ElementRef, Selector};

/// Compile a CSS selector
pub fn selector(css: &str) -> Result<Selector, ProviderError> {
    Selector::parse(css)
        .map_err(|e| ProviderError::Other(format!("invalid selector '{}': {}", css, e)))
}

/// Text content of an element with each text node trimmed and blank nodes
/// dropped, joined by single spaces
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first element matching `selector` below `scope`
pub fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(element_text)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_element_text_collapses_nodes() {
        let html = Html::parse_fragment("<p>  Adı <b>Soyadı</b>\n </p>");
        let p = html.select(&selector("p").unwrap()).next().unwrap();
        assert_eq!(element_text(p), "Adı Soyadı");
    }

    #[test]
    fn test_first_text_skips_missing() {
        let html = Html::parse_fragment("<div><span> </span></div>");
        let root = html.root_element();
        assert_eq!(first_text(root, &selector("span").unwrap()), None);
        assert_eq!(first_text(root, &selector("em").unwrap()), None);
    }
}
