//! Batch scheduler: bounded-concurrency detail extraction.

use std::time::Instant;

use futures::future::join_all;
use log::{error, warn};

use super::extractor::extract_detail;
use crate::app::log_progress;
use crate::browser::BrowserSession;
use crate::config::Config;
use crate::error_handling::{update_error_stats, BrowserError, ProcessingStats};
use crate::models::PropertyRecord;

/// Records produced for a URL list, in input order.
#[derive(Debug, Default)]
pub struct BatchOutput {
    pub records: Vec<PropertyRecord>,
    /// URLs whose page could not be loaded; their records are sentinel-filled.
    pub failed: usize,
}

/// Extracts every URL in consecutive groups of `width`.
///
/// Groups run one after another; inside a group all extractions run
/// concurrently, each on its own page, and the group fully settles before the
/// next starts, so at most `width` pages are ever open. A per-URL failure
/// becomes a sentinel record tagged with its URL.
///
/// # Errors
///
/// Returns the first fatal `BrowserError` (session gone) once its group has
/// settled; records gathered so far are discarded.
pub async fn run_batches(
    session: &dyn BrowserSession,
    urls: &[String],
    width: usize,
    config: &Config,
    stats: &ProcessingStats,
) -> Result<BatchOutput, BrowserError> {
    let width = width.max(1);
    let total_batches = urls.len().div_ceil(width);
    let start_time = Instant::now();
    let mut output = BatchOutput {
        records: Vec::with_capacity(urls.len()),
        failed: 0,
    };

    for (index, group) in urls.chunks(width).enumerate() {
        let results = join_all(
            group
                .iter()
                .map(|url| extract_detail(session, url, config, stats)),
        )
        .await;

        let mut fatal = None;
        for (url, result) in group.iter().zip(results) {
            match result {
                Ok(record) => output.records.push(record),
                Err(e) if e.is_fatal() => {
                    error!("Browser session lost while extracting {url}: {e}");
                    fatal.get_or_insert(e);
                }
                Err(e) => {
                    warn!("Failed to extract {url}: {e}");
                    update_error_stats(stats, &e);
                    output.failed += 1;
                    output.records.push(PropertyRecord::unavailable(url.as_str()));
                }
            }
        }
        if let Some(e) = fatal {
            return Err(e);
        }

        log_progress(
            start_time,
            index + 1,
            total_batches,
            output.records.len(),
            urls.len(),
        );
    }

    Ok(output)
}
