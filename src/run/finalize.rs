//! Export and run finalization.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::app::print_error_statistics;
use crate::config::{Config, COMBINED_FILE_STEM};
use crate::error_handling::ProcessingStats;
use crate::export::{export_records, sanitize_file_name};
use crate::models::PropertyRecord;

use super::CrawlReport;

/// Writes one query's records to `<output_dir>/<sanitized query>.<ext>`.
pub fn export_query(records: &[PropertyRecord], query: &str, config: &Config) -> Result<PathBuf> {
    export_records(
        records,
        &config.output_dir,
        &sanitize_file_name(query),
        config.format,
    )
    .with_context(|| format!("Failed to export records for {query}"))
}

/// Writes every record of the run to `<output_dir>/combined.<ext>`.
pub fn export_combined(records: &[PropertyRecord], config: &Config) -> Result<PathBuf> {
    export_records(
        records,
        &config.output_dir,
        COMBINED_FILE_STEM,
        config.format,
    )
    .context("Failed to export combined records")
}

/// Prints the run statistics and stamps the elapsed time on the report.
pub fn finalize_crawl(
    mut report: CrawlReport,
    stats: &ProcessingStats,
    start_time: Instant,
) -> CrawlReport {
    report.elapsed_seconds = start_time.elapsed().as_secs_f64();
    print_error_statistics(stats);
    report
}
