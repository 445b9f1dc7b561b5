//! Pipeline orchestration.
//!
//! Per query: pager, harvester across pages, scheduler, then export. The
//! browser session is shared by every query and closed on the way out, on
//! success and failure alike.

mod finalize;
mod query;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{error, info, warn};

use crate::app::{print_simple_summary, read_queries_file, validate_url};
use crate::browser::BrowserSession;
use crate::config::Config;
use crate::error_handling::{update_error_stats, ErrorType, ProcessingStats};
use crate::export::ExportMode;
use crate::initialization::{init_selectors, init_session};

pub use finalize::{export_combined, export_query};
pub use query::{process_query, QueryOutcome};

/// Results of a crawl run.
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Valid queries crawled
    pub queries: usize,
    /// Results pages harvested across all queries
    pub pages: usize,
    /// Distinct detail URLs scheduled
    pub urls: usize,
    /// Records exported
    pub records: usize,
    /// Records whose detail page could not be loaded
    pub failed_extractions: usize,
    /// Exports that could not be written
    pub failed_exports: usize,
    /// Files written, in order
    pub output_files: Vec<PathBuf>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Crawls every configured query with a fresh HTTP-backed session.
///
/// # Errors
///
/// Returns an error if the query file or selector file cannot be read, or the
/// session cannot be created or is lost mid-run. A failed export is logged and
/// counted in [`CrawlReport::failed_exports`]; the run continues.
///
/// # Example
///
/// ```no_run
/// use property_crawler::{run_crawl, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     queries: vec!["https://www.boligsiden.dk/tilsalg/husbaad".to_string()],
///     ..Default::default()
/// };
/// let report = run_crawl(config).await?;
/// println!("{} records in {:?}", report.records, report.output_files);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(mut config: Config) -> Result<CrawlReport> {
    config.selectors = init_selectors(&config).context("Failed to load selectors")?;
    let session = init_session(&config).context("Failed to initialize browser session")?;
    run_crawl_with_session(config, &session).await
}

/// Crawls every configured query with the given session, closing it at the
/// end.
///
/// `config.selectors` is used as is.
///
/// # Errors
///
/// See [`run_crawl`].
pub async fn run_crawl_with_session(
    config: Config,
    session: &dyn BrowserSession,
) -> Result<CrawlReport> {
    let start_time = Instant::now();
    let stats = ProcessingStats::new();

    let result = crawl_queries(&config, session, &stats).await;
    session.close().await;

    let report = finalize::finalize_crawl(result?, &stats, start_time);
    print_simple_summary(
        report.records,
        report.failed_extractions,
        report.output_files.len(),
        report.elapsed_seconds,
    );
    Ok(report)
}

async fn crawl_queries(
    config: &Config,
    session: &dyn BrowserSession,
    stats: &ProcessingStats,
) -> Result<CrawlReport> {
    let mut queries = config.queries.clone();
    if let Some(file) = &config.file {
        queries.extend(read_queries_file(file).await?);
    }
    if queries.is_empty() {
        warn!("No query URLs given; nothing to crawl");
    }

    let mut report = CrawlReport::default();
    let mut combined = Vec::new();

    for query in &queries {
        if let Err(e) = validate_url(query) {
            warn!("Skipping query: {e}");
            update_error_stats(stats, &e);
            continue;
        }
        info!("Crawling {query}");
        report.queries += 1;

        let outcome = process_query(session, query, config, stats)
            .await
            .with_context(|| format!("Browser session failed while crawling {query}"))?;

        report.pages += outcome.pages;
        report.urls += outcome.urls;
        report.records += outcome.records.len();
        report.failed_extractions += outcome.failed;

        match config.export_mode {
            ExportMode::PerQuery => {
                record_export(&mut report, export_query(&outcome.records, query, config), stats);
            }
            ExportMode::Combined => combined.extend(outcome.records),
        }
    }

    if config.export_mode == ExportMode::Combined && report.queries > 0 {
        record_export(&mut report, export_combined(&combined, config), stats);
    }

    Ok(report)
}

fn record_export(report: &mut CrawlReport, written: Result<PathBuf>, stats: &ProcessingStats) {
    match written {
        Ok(path) => report.output_files.push(path),
        Err(e) => {
            error!("{e:#}");
            stats.increment_error(ErrorType::ExportFailed);
            report.failed_exports += 1;
        }
    }
}
