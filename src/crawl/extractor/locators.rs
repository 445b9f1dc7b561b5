//! Locator chains: ordered strategies per field, first hit wins.

use scraper::Html;

use crate::browser::dom;
use crate::config::{Selectors, ADDRESS_SEPARATOR};

/// One way of finding a field on a parsed detail page.
pub type Locator = fn(&Html, &Selectors) -> Option<String>;

pub const NAME: &[Locator] = &[
    |doc, s| dom::select_attr(doc, &s.title_meta, "content", "name"),
    |doc, s| dom::select_text(doc, &s.title, "name fallback"),
];

pub const DESCRIPTION: &[Locator] = &[|doc, s| dom::select_text(doc, &s.description, "description")];

pub const ADDRESS: &[Locator] = &[compose_address];

pub const ENERGY_RATING: &[Locator] =
    &[|doc, s| dom::select_text(doc, &s.energy_rating, "energy rating")];

pub const TRANSACTION_TYPE: &[Locator] =
    &[|doc, s| dom::select_text(doc, &s.transaction_type, "transaction type")];

/// Runs `chain` left to right and returns the first value found.
pub fn first_match(document: &Html, selectors: &Selectors, chain: &[Locator]) -> Option<String> {
    chain.iter().find_map(|locate| locate(document, selectors))
}

/// Street and locality from the page heading, joined by the separator.
///
/// Both parts are looked up under any heading, not only the first one.
/// Whichever part is present is used alone; `None` when neither is found.
pub fn compose_address(document: &Html, selectors: &Selectors) -> Option<String> {
    let parts: Vec<String> = [
        dom::select_text(document, &selectors.street(), "address street"),
        dom::select_text(document, &selectors.locality(), "address locality"),
    ]
    .into_iter()
    .flatten()
    .collect();
    (!parts.is_empty()).then(|| parts.join(ADDRESS_SEPARATOR))
}
