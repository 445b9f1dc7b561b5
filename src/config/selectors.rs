//! Locator configuration.
//!
//! Every CSS selector the crawler uses lives here so that differences between
//! site variants are configuration rather than code. Overrides are read from a
//! JSON file; fields missing from the file keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error_handling::InitializationError;

/// CSS selectors used by the pager, harvester and field extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Cookie-consent accept button.
    pub consent_button: String,
    /// Result-count heading, exact class match.
    pub result_count_primary: String,
    /// Result-count heading, partial class match.
    pub result_count_fallback: String,
    /// Element wrapping the result cards on a search page.
    pub listing_container: String,
    /// Links inside the listing container.
    pub listing_link: String,
    /// Page-level title metadata.
    pub title_meta: String,
    /// Document title element.
    pub title: String,
    pub description: String,
    /// Heading block holding the street and locality spans.
    pub address_heading: String,
    pub address_street: String,
    pub address_locality: String,
    pub energy_rating: String,
    pub transaction_type: String,
    /// One row of the key/value facts table.
    pub characteristics_row: String,
    /// Embedded JSON-LD blocks.
    pub structured_data: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            consent_button: "#didomi-notice-agree-button".to_string(),
            result_count_primary: "h1.flex-1.text-blue-900.text-xl.font-black".to_string(),
            result_count_fallback: r#"h1[class*="flex-1"][class*="text-blue-900"][class*="text-xl"][class*="font-black"]"#
                .to_string(),
            listing_container: "div.relative.min-h-80".to_string(),
            listing_link: "a".to_string(),
            title_meta: r#"meta[property="og:title"]"#.to_string(),
            title: "title".to_string(),
            description: "span.text-gray-600.pr-2".to_string(),
            address_heading: "h1".to_string(),
            address_street: "span.text-lg.font-semibold".to_string(),
            address_locality: "span.text-xs.font-light".to_string(),
            energy_rating: "div[data-tooltipped] svg title".to_string(),
            transaction_type: "span.rounded-full.font-semibold".to_string(),
            characteristics_row: r#"div[data-testid="property-facts"] li"#.to_string(),
            structured_data: r#"script[type="application/ld+json"]"#.to_string(),
        }
    }
}

impl Selectors {
    /// Loads selector overrides from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::SelectorFileError` if the file cannot be
    /// read or is not a valid JSON object.
    pub fn from_json_file(path: &Path) -> Result<Self, InitializationError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            InitializationError::SelectorFileError(format!("{}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
            .map_err(|e| InitializationError::SelectorFileError(format!("{}: {e}", path.display())))
    }

    pub(crate) fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Selector matching listing links inside the listing container.
    pub fn listing_links(&self) -> String {
        format!("{} {}", self.listing_container, self.listing_link)
    }

    pub fn street(&self) -> String {
        format!("{} {}", self.address_heading, self.address_street)
    }

    pub fn locality(&self) -> String {
        format!("{} {}", self.address_heading, self.address_locality)
    }
}
