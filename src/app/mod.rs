//! Application helpers.
//!
//! This module provides URL validation, query-file loading, progress logging
//! and statistics printing used by the crawl pipeline.

pub mod input;
pub mod logging;
pub mod statistics;
pub mod url;

// Re-export public API
pub use input::read_queries_file;
pub use logging::log_progress;
pub use statistics::{print_error_statistics, print_simple_summary};
pub use url::{is_valid_url, page_url, resolve_link, validate_url};
