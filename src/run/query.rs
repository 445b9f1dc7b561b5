//! One query: pager, harvester over every page, then the scheduler.

use log::{info, warn};

use crate::app::{is_valid_url, page_url};
use crate::browser::BrowserSession;
use crate::config::Config;
use crate::crawl::{discover_page_count, harvest_page, run_batches};
use crate::error_handling::{
    update_error_stats, BrowserError, ErrorType, InfoType, ProcessingStats,
};
use crate::models::{PropertyRecord, UrlSet};

/// What one query produced.
#[derive(Debug, Default)]
pub struct QueryOutcome {
    pub pages: usize,
    pub urls: usize,
    pub records: Vec<PropertyRecord>,
    pub failed: usize,
}

/// Crawls one query end to end.
///
/// Page-count discovery and harvesting share one page and run strictly in
/// sequence; URLs are unioned across pages in first-seen order before
/// extraction starts.
///
/// # Errors
///
/// Returns a fatal `BrowserError` if the session is lost.
pub async fn process_query(
    session: &dyn BrowserSession,
    query: &str,
    config: &Config,
    stats: &ProcessingStats,
) -> Result<QueryOutcome, BrowserError> {
    let Some((pages, urls)) = harvest_query(session, query, config, stats).await? else {
        return Ok(QueryOutcome::default());
    };
    if urls.is_empty() {
        info!("{query}: no detail URLs found");
        return Ok(QueryOutcome {
            pages,
            ..Default::default()
        });
    }

    let urls: Vec<String> = urls
        .into_iter()
        .filter(|url| {
            let valid = is_valid_url(url);
            if !valid {
                warn!("Skipping invalid detail URL: {url}");
                stats.increment_error(ErrorType::InvalidUrl);
            }
            valid
        })
        .collect();

    info!(
        "{query}: extracting {} detail page(s), {} at a time",
        urls.len(),
        config.batch_width()
    );
    let output = run_batches(session, &urls, config.batch_width(), config, stats).await?;

    Ok(QueryOutcome {
        pages,
        urls: urls.len(),
        records: output.records,
        failed: output.failed,
    })
}

/// Page count and the distinct URLs across all pages, or `None` if no page
/// could be opened.
async fn harvest_query(
    session: &dyn BrowserSession,
    query: &str,
    config: &Config,
    stats: &ProcessingStats,
) -> Result<Option<(usize, UrlSet)>, BrowserError> {
    let mut page = match session.new_page().await {
        Ok(page) => page,
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            warn!("Failed to open a page for {query}: {e}");
            stats.increment_error(ErrorType::PageOpenError);
            return Ok(None);
        }
    };

    let pages = discover_page_count(page.as_mut(), query, config, stats).await;
    let mut accumulated = UrlSet::new();
    for page_number in 1..=pages {
        let harvested = harvest_page(
            page.as_mut(),
            &page_url(query, page_number),
            config,
            stats,
        )
        .await;
        let duplicates = accumulated.union(harvested);
        stats.add_info(InfoType::DuplicateUrlSuppressed, duplicates);
    }
    page.close().await;

    if session.is_closed() {
        let e = BrowserError::SessionClosed;
        update_error_stats(stats, &e);
        return Err(e);
    }

    info!(
        "{query}: {} distinct URL(s) across {pages} page(s)",
        accumulated.len()
    );
    Ok(Some((pages, accumulated)))
}
