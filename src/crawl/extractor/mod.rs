//! Field extractor: one detail page to one [`PropertyRecord`].
//!
//! Navigation and waiting happen against the page context; everything after
//! that is a pure function of the serialized document, so each field's
//! locator chain can be tested on static HTML.

mod classify;
mod locators;

use log::debug;
use scraper::Html;

use super::metadata::parse_structured_metadata;
use crate::browser::{BrowserSession, PageContext};
use crate::config::{Config, Selectors, NOT_AVAILABLE};
use crate::error_handling::{BrowserError, InfoType, ProcessingStats, WarningType};
use crate::models::{Characteristics, PropertyRecord};

pub use classify::{classify_property_type, PROPERTY_TYPES};
pub use locators::{compose_address, first_match, Locator};

/// What to extract and how to recognize it.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionOptions<'a> {
    pub selectors: &'a Selectors,
    pub area_unit: &'a str,
    pub characteristics: bool,
}

impl<'a> From<&'a Config> for ExtractionOptions<'a> {
    fn from(config: &'a Config) -> Self {
        Self {
            selectors: &config.selectors,
            area_unit: &config.area_unit,
            characteristics: !config.no_characteristics,
        }
    }
}

/// Side observations made while building a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Fields left as the sentinel.
    pub missing: Vec<WarningType>,
    pub duplicate_characteristics: usize,
    pub malformed_metadata_blocks: usize,
}

impl ExtractionReport {
    fn record(&self, stats: &ProcessingStats) {
        for warning in &self.missing {
            stats.increment_warning(*warning);
        }
        stats.add_info(
            InfoType::DuplicateCharacteristic,
            self.duplicate_characteristics,
        );
        if self.malformed_metadata_blocks > 0 {
            stats.increment_warning(WarningType::MalformedMetadata);
        }
    }
}

/// Builds the record for `source_url` from its parsed detail page.
pub fn extract_fields(
    document: &Html,
    source_url: &str,
    options: ExtractionOptions<'_>,
) -> (PropertyRecord, ExtractionReport) {
    let selectors = options.selectors;
    let mut report = ExtractionReport::default();
    let mut resolve = |value: Option<String>, warning: WarningType| {
        value.unwrap_or_else(|| {
            report.missing.push(warning);
            NOT_AVAILABLE.to_string()
        })
    };

    let name = resolve(
        first_match(document, selectors, locators::NAME),
        WarningType::MissingName,
    );
    let description = resolve(
        first_match(document, selectors, locators::DESCRIPTION),
        WarningType::MissingDescription,
    );
    let address = resolve(
        first_match(document, selectors, locators::ADDRESS),
        WarningType::MissingAddress,
    );
    let energy_rating = resolve(
        first_match(document, selectors, locators::ENERGY_RATING),
        WarningType::MissingEnergyRating,
    );
    let transaction_type = resolve(
        first_match(document, selectors, locators::TRANSACTION_TYPE),
        WarningType::MissingTransactionType,
    );

    let (characteristics, duplicates) = if options.characteristics {
        Characteristics::from_rows(crate::browser::dom::select_all_text(
            document,
            &selectors.characteristics_row,
            "characteristics",
        ))
    } else {
        (Characteristics::default(), 0)
    };
    let area = resolve(
        characteristics.area(options.area_unit),
        WarningType::MissingArea,
    );

    let property_type = resolve(
        classify_property_type(&name, &description).map(str::to_string),
        WarningType::MissingPropertyType,
    );

    let metadata = parse_structured_metadata(document, &selectors.structured_data);
    let price = resolve(metadata.price, WarningType::MissingPrice);
    let has_coordinates = metadata.latitude.is_some() && metadata.longitude.is_some();
    let latitude = metadata
        .latitude
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let longitude = metadata
        .longitude
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    if !has_coordinates {
        report.missing.push(WarningType::MissingCoordinates);
    }

    report.duplicate_characteristics = duplicates;
    report.malformed_metadata_blocks = metadata.malformed_blocks;

    let record = PropertyRecord {
        name,
        description,
        address,
        price,
        property_type,
        area,
        energy_rating,
        transaction_type,
        latitude,
        longitude,
        characteristics,
        source_url: source_url.to_string(),
    };
    (record, report)
}

/// Opens a page, loads `url` and extracts its record.
///
/// The page is closed on every path. A missing transaction-type label only
/// costs its bounded wait; the field then falls back to the sentinel.
///
/// # Errors
///
/// Returns the `BrowserError` that prevented the page from being opened,
/// loaded or read. The caller decides whether that is fatal.
pub async fn extract_detail(
    session: &dyn BrowserSession,
    url: &str,
    config: &Config,
    stats: &ProcessingStats,
) -> Result<PropertyRecord, BrowserError> {
    let mut page = session.new_page().await?;
    let result = load_and_extract(page.as_mut(), url, config, stats).await;
    page.close().await;
    result
}

async fn load_and_extract(
    page: &mut dyn PageContext,
    url: &str,
    config: &Config,
    stats: &ProcessingStats,
) -> Result<PropertyRecord, BrowserError> {
    page.goto(url, config.detail_timeout()).await?;

    if let Err(e) = page
        .wait_for_selector(
            &config.selectors.transaction_type,
            config.transaction_type_timeout(),
        )
        .await
    {
        if e.is_fatal() {
            return Err(e);
        }
        debug!("Transaction type not shown on {url}: {e}");
    }

    let html = page.content().await?;
    let (record, report) = {
        let document = Html::parse_document(&html);
        extract_fields(&document, url, ExtractionOptions::from(config))
    };
    report.record(stats);
    if !report.missing.is_empty() {
        debug!("{url}: unresolved fields {:?}", report.missing);
    }
    Ok(record)
}
