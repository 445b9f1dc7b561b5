//! Structured metadata (`application/ld+json`) on detail pages.

use log::debug;
use scraper::Html;
use serde_json::Value;

use crate::browser::dom;

/// `@type`s treated as the listed dwelling.
const RESIDENCE_TYPES: &[&str] = &[
    "SingleFamilyResidence",
    "House",
    "Apartment",
    "Residence",
    "Accommodation",
];

/// `@type`s carrying the asking price.
const PRODUCT_TYPES: &[&str] = &["Product", "Offer", "RealEstateListing"];

/// Fields recovered from the page's structured-data blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredMetadata {
    pub price: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    /// Blocks that were present but not valid JSON.
    pub malformed_blocks: usize,
}

/// Parses every structured-data block matched by `selector`.
///
/// Each block holds one entity or an array of them. A residence entity
/// supplies `geo`, a product entity supplies `offers`; when several entities
/// of the same kind appear, the one seen last wins outright, even if it lacks
/// the sub-object. Malformed blocks are counted and skipped.
pub fn parse_structured_metadata(document: &Html, selector: &str) -> StructuredMetadata {
    let mut geo: Option<Value> = None;
    let mut offers: Option<Value> = None;
    let mut malformed_blocks = 0;

    for raw in dom::select_all_raw_text(document, selector, "structured data") {
        let block: Value = match serde_json::from_str(raw.trim()) {
            Ok(value) => value,
            Err(e) => {
                debug!("Skipping malformed structured-data block: {e}");
                malformed_blocks += 1;
                continue;
            }
        };

        for entity in entities(&block) {
            if has_type(entity, RESIDENCE_TYPES) {
                geo = entity.get("geo").cloned();
            }
            if has_type(entity, PRODUCT_TYPES) {
                offers = entity.get("offers").cloned();
            }
        }
    }

    let geo = geo.unwrap_or(Value::Null);
    StructuredMetadata {
        price: offers.as_ref().and_then(offer_price),
        latitude: scalar(geo.get("latitude")),
        longitude: scalar(geo.get("longitude")),
        malformed_blocks,
    }
}

fn entities(block: &Value) -> Vec<&Value> {
    match block {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => match map.get("@graph") {
            Some(Value::Array(items)) => items.iter().collect(),
            _ => vec![block],
        },
        _ => Vec::new(),
    }
}

fn has_type(entity: &Value, wanted: &[&str]) -> bool {
    match entity.get("@type") {
        Some(Value::String(t)) => wanted.contains(&t.as_str()),
        Some(Value::Array(ts)) => ts
            .iter()
            .filter_map(Value::as_str)
            .any(|t| wanted.contains(&t)),
        _ => false,
    }
}

/// `offers.price`; when `offers` is a list, the first offer with a price.
fn offer_price(offers: &Value) -> Option<String> {
    match offers {
        Value::Array(list) => list.iter().find_map(|offer| scalar(offer.get("price"))),
        _ => scalar(offers.get("price")),
    }
}

/// Numbers and non-empty strings rendered as text.
fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}
