//! property_crawler library: paginated listing crawls into spreadsheets
//!
//! For every query URL (a filtered search on a listing site) the crawler
//! learns how many results pages there are, harvests the detail-page links
//! from each page, extracts a [`PropertyRecord`] from every distinct detail
//! page with bounded concurrency, and exports the records as XLSX or CSV.
//!
//! # Example
//!
//! ```no_run
//! use property_crawler::{run_crawl, Config, ExportFormat};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     queries: vec!["https://www.boligsiden.dk/tilsalg/husbaad".to_string()],
//!     concurrency: 5,
//!     format: ExportFormat::Csv,
//!     ..Default::default()
//! };
//!
//! let report = run_crawl(config).await?;
//! println!(
//!     "{} records from {} pages, {} failed",
//!     report.records, report.pages, report.failed_extractions
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
pub mod browser;
pub mod config;
pub mod crawl;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod models;
mod run;

// Re-export public API
pub use app::{page_url, validate_url};
pub use browser::{BrowserSession, HttpSession, PageContext};
pub use config::{Config, LogFormat, LogLevel, Selectors};
pub use crawl::{discover_page_count, extract_detail, harvest_page, run_batches};
pub use export::{ExportFormat, ExportMode};
pub use models::{Characteristics, PropertyRecord, UrlSet};
pub use run::{process_query, run_crawl, run_crawl_with_session, CrawlReport, QueryOutcome};
