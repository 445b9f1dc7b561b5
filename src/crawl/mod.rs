//! Crawl components.
//!
//! Leaves first: the consent helper, the [`metadata`] parser and the field
//! [`extractor`] work on one page; the [`pager`] and [`harvester`] walk the
//! results pages of a query; the [`scheduler`] fans extraction out over the
//! harvested URLs.

pub mod consent;
pub mod extractor;
pub mod harvester;
pub mod metadata;
pub mod pager;
pub mod scheduler;

pub use consent::accept_cookies;
pub use extractor::{
    classify_property_type, extract_detail, extract_fields, ExtractionOptions, ExtractionReport,
};
pub use harvester::{collect_links, harvest_page};
pub use metadata::{parse_structured_metadata, StructuredMetadata};
pub use pager::{discover_page_count, page_count, parse_result_count};
pub use scheduler::{run_batches, BatchOutput};
