//! Configuration constants.
//!
//! This module defines the constants used throughout the crawler, including
//! pagination arithmetic, timeouts, retry backoff and export formatting.

use std::time::Duration;

/// Marker written into every field that could not be resolved.
pub const NOT_AVAILABLE: &str = "N/A";

/// Number of listings the results page shows per page.
///
/// Page count is derived as `ceil(result_count / RESULTS_PAGE_SIZE)`.
pub const RESULTS_PAGE_SIZE: usize = 50;

/// Number of detail pages extracted concurrently per batch.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Query-string parameter that selects a results page.
pub const PAGE_QUERY_PARAM: &str = "page";

// Page timeouts
/// Navigation timeout for results pages in seconds.
pub const NAVIGATION_TIMEOUT_SECS: u64 = 20;
/// Navigation timeout for detail pages in seconds.
pub const DETAIL_TIMEOUT_SECS: u64 = 30;
/// How long to wait for the listing container on a results page.
pub const LISTING_WAIT_SECS: u64 = 60;
/// How long to wait for the cookie-consent button before giving up.
pub const CONSENT_TIMEOUT_SECS: u64 = 5;
/// How long to wait for the transaction-type label on a detail page.
///
/// On timeout the field falls back to the sentinel.
pub const TRANSACTION_TYPE_TIMEOUT_SECS: u64 = 10;
/// First interval between document re-fetches while waiting for a selector.
///
/// The interval doubles after each re-fetch, up to `SELECTOR_POLL_MAX_INTERVAL`.
pub const SELECTOR_POLL_INTERVAL: Duration = Duration::from_millis(250);
/// Longest interval between document re-fetches while waiting for a selector.
pub const SELECTOR_POLL_MAX_INTERVAL: Duration = Duration::from_secs(2);

// Retry strategy
/// Initial delay in milliseconds before the first navigation retry.
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which the retry delay grows on each attempt.
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between navigation retries in seconds.
pub const RETRY_MAX_DELAY_SECS: u64 = 10;
/// Default number of navigation retries after the initial attempt.
pub const NAVIGATION_RETRIES: usize = 2;

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// Default User-Agent string for page requests.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Extraction
/// Token that marks a characteristics entry as the living-area measurement.
pub const AREA_UNIT_TOKEN: &str = "m²";
/// Separator between street and locality when composing an address.
pub const ADDRESS_SEPARATOR: &str = ", ";

// Export
/// Separator between serialized characteristics pairs.
pub const CHARACTERISTICS_DELIMITER: &str = "; ";
/// Default directory export files are written to.
pub const OUTPUT_DIR: &str = "output";
/// File stem used when all queries are exported into one file.
pub const COMBINED_FILE_STEM: &str = "combined";
/// Longest query-derived file stem kept before a digest suffix is appended.
pub const MAX_FILE_STEM_LEN: usize = 200;
/// Hex digits of the query digest appended to a shortened stem.
pub const FILE_STEM_DIGEST_LEN: usize = 12;
/// Worksheet name used for XLSX exports.
pub const XLSX_SHEET_NAME: &str = "Properties";

// Logging
/// Log progress after every N completed batches.
pub const LOGGING_INTERVAL: usize = 5;
