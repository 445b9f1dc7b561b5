//! Progress logging utilities.

use log::info;

use crate::config::LOGGING_INTERVAL;

/// Logs detail-extraction progress after a batch settles.
///
/// Logs on every `LOGGING_INTERVAL`-th batch and on the last one.
pub fn log_progress(
    start_time: std::time::Instant,
    batch_number: usize,
    total_batches: usize,
    completed_urls: usize,
    total_urls: usize,
) {
    if batch_number % LOGGING_INTERVAL != 0 && batch_number != total_batches {
        return;
    }
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed_urls as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Batch {}/{}: extracted {}/{} detail pages in {:.2} seconds (~{:.2} pages/sec)",
        batch_number, total_batches, completed_urls, total_urls, elapsed_secs, rate
    );
}
