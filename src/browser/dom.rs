//! DOM query helpers over a parsed document snapshot.
//!
//! All helpers are synchronous and take a parsed `scraper::Html`, which is not
//! `Send`; parse, query and drop it without crossing an `.await`.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error_handling::BrowserError;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex - this is a bug"));

/// Parses a CSS selector.
///
/// # Errors
///
/// Returns `BrowserError::InvalidSelector` if the selector does not parse.
pub fn parse_selector(selector: &str) -> Result<Selector, BrowserError> {
    Selector::parse(selector).map_err(|_| BrowserError::InvalidSelector(selector.to_string()))
}

/// Parses a CSS selector, logging and returning `None` when it is invalid.
///
/// Used by locator strategies: a broken configured selector is a miss, not a
/// crash.
pub fn parse_selector_lenient(selector: &str, context: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::error!("Failed to parse CSS selector '{selector}' in {context}: {e}");
            None
        }
    }
}

/// Text content of an element with runs of whitespace collapsed and trimmed.
pub fn element_text(element: ElementRef<'_>) -> String {
    let joined = element.text().collect::<String>();
    WHITESPACE.replace_all(&joined, " ").trim().to_string()
}

/// Whether `selector` matches anything in `document`.
pub fn matches(document: &Html, selector: &Selector) -> bool {
    document.select(selector).next().is_some()
}

/// Text of the first element matching `selector`, if non-empty.
pub fn select_text(document: &Html, selector: &str, context: &str) -> Option<String> {
    let selector = parse_selector_lenient(selector, context)?;
    let element = document.select(&selector).next()?;
    let text = element_text(element);
    (!text.is_empty()).then_some(text)
}

/// Attribute of the first element matching `selector`, if non-empty.
pub fn select_attr(document: &Html, selector: &str, attr: &str, context: &str) -> Option<String> {
    let selector = parse_selector_lenient(selector, context)?;
    let value = document.select(&selector).next()?.value().attr(attr)?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Texts of every element matching `selector`, in document order.
pub fn select_all_text(document: &Html, selector: &str, context: &str) -> Vec<String> {
    let Some(selector) = parse_selector_lenient(selector, context) else {
        return Vec::new();
    };
    document.select(&selector).map(element_text).collect()
}

/// Raw inner text of every element matching `selector`, untouched.
///
/// Script bodies must not have their whitespace collapsed.
pub fn select_all_raw_text(document: &Html, selector: &str, context: &str) -> Vec<String> {
    let Some(selector) = parse_selector_lenient(selector, context) else {
        return Vec::new();
    };
    document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect()
}

/// Values of `attr` on every element matching `selector`, in document order.
pub fn select_all_attr(document: &Html, selector: &str, attr: &str, context: &str) -> Vec<String> {
    let Some(selector) = parse_selector_lenient(selector, context) else {
        return Vec::new();
    };
    document
        .select(&selector)
        .filter_map(|element| element.value().attr(attr))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
            <head><title>  Villa   i Aarhus </title></head>
            <body>
                <h1><span class="street">Strandvejen 1</span><span class="city">8000 Aarhus</span></h1>
                <ul><li>Rooms:
                    4</li><li>Floor: 2</li></ul>
                <a href="/a">A</a><a href="">empty</a><a>none</a>
            </body>
        </html>
    "#;

    #[test]
    fn test_select_text_collapses_whitespace() {
        let document = Html::parse_document(PAGE);
        assert_eq!(
            select_text(&document, "title", "test"),
            Some("Villa i Aarhus".to_string())
        );
        assert_eq!(
            select_all_text(&document, "ul li", "test"),
            vec!["Rooms: 4".to_string(), "Floor: 2".to_string()]
        );
    }

    #[test]
    fn test_select_missing_is_none() {
        let document = Html::parse_document(PAGE);
        assert_eq!(select_text(&document, "span.missing", "test"), None);
        assert_eq!(select_attr(&document, "meta", "content", "test"), None);
    }

    #[test]
    fn test_select_all_attr_skips_empty() {
        let document = Html::parse_document(PAGE);
        assert_eq!(
            select_all_attr(&document, "a", "href", "test"),
            vec!["/a".to_string()]
        );
    }

    #[test]
    fn test_invalid_selector_is_a_miss() {
        let document = Html::parse_document(PAGE);
        assert_eq!(select_text(&document, "h1[", "test"), None);
        assert!(select_all_text(&document, "h1[", "test").is_empty());
        assert!(matches!(
            parse_selector("h1["),
            Err(BrowserError::InvalidSelector(_))
        ));
    }
}
