//! Error categorization and retry strategy.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::stats::ProcessingStats;
use super::types::{BrowserError, ErrorType};

/// Creates an exponential backoff retry strategy for navigations.
///
/// Returns a strategy starting at `RETRY_INITIAL_DELAY_MS`, growing by
/// `RETRY_FACTOR` and capped at `RETRY_MAX_DELAY_SECS`, yielding at most
/// `retries` delays (so at most `retries + 1` attempts).
pub fn get_retry_strategy(retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(crate::config::RETRY_INITIAL_DELAY_MS)
        .factor(crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(retries)
}

/// Maps a `BrowserError` onto the counted `ErrorType`.
pub fn categorize_browser_error(error: &BrowserError) -> ErrorType {
    match error {
        BrowserError::InvalidUrl { .. } => ErrorType::InvalidUrl,
        BrowserError::NavigationTimeout { .. } => ErrorType::NavigationTimeout,
        BrowserError::Navigation { .. } => ErrorType::NavigationError,
        BrowserError::HttpStatus { .. } => ErrorType::HttpStatusError,
        BrowserError::SelectorTimeout { .. } => ErrorType::SelectorTimeout,
        BrowserError::SessionClosed => ErrorType::PageOpenError,
        BrowserError::SelectorNotFound(_)
        | BrowserError::InvalidSelector(_)
        | BrowserError::NoDocument => ErrorType::OtherError,
    }
}

/// Records a browser error in the statistics under its category.
pub fn update_error_stats(stats: &ProcessingStats, error: &BrowserError) {
    stats.increment_error(categorize_browser_error(error));
}
