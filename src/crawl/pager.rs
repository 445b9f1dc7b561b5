//! Listing pager: how many results pages a query has.

use std::sync::LazyLock;

use log::{debug, info, warn};
use regex::Regex;
use scraper::Html;

use super::consent::accept_cookies;
use crate::browser::{dom, PageContext};
use crate::config::{Config, Selectors};
use crate::error_handling::{update_error_stats, ProcessingStats, WarningType};

static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\D").expect("Failed to compile digit regex - this is a bug"));

/// Parses a displayed result count such as `"1.234 boliger"` into `1234`.
///
/// Every non-digit character is stripped first, so thousands separators of
/// any locale are accepted. Returns `None` when no digits remain.
pub fn parse_result_count(label: &str) -> Option<usize> {
    let digits = NON_DIGITS.replace_all(label, "");
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Number of results pages for `count` results at `page_size` per page.
pub fn page_count(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Result-count label text, trying the exact locator then the partial one.
pub fn read_result_count_label(document: &Html, selectors: &Selectors) -> Option<String> {
    let strategies: [fn(&Html, &Selectors) -> Option<String>; 2] = [
        |doc, s| dom::select_text(doc, &s.result_count_primary, "result count"),
        |doc, s| dom::select_text(doc, &s.result_count_fallback, "result count fallback"),
    ];
    strategies.iter().find_map(|strategy| strategy(document, selectors))
}

/// Loads `query` on `page` and works out how many results pages it has.
///
/// Consent is dismissed first. A missing label, an unparseable count and any
/// navigation failure all yield `0`; the query is then simply skipped.
pub async fn discover_page_count(
    page: &mut dyn PageContext,
    query: &str,
    config: &Config,
    stats: &ProcessingStats,
) -> usize {
    if let Err(e) = page.goto(query, config.navigation_timeout()).await {
        warn!("Failed to load results page {query}: {e}");
        update_error_stats(stats, &e);
        return 0;
    }

    accept_cookies(
        page,
        &config.selectors.consent_button,
        config.consent_timeout(),
        stats,
    )
    .await;

    let html = match page.content().await {
        Ok(html) => html,
        Err(e) => {
            warn!("Failed to read results page {query}: {e}");
            update_error_stats(stats, &e);
            return 0;
        }
    };

    let label = {
        let document = Html::parse_document(&html);
        read_result_count_label(&document, &config.selectors)
    };

    let Some(label) = label else {
        debug!("No result count label on {query}");
        stats.increment_warning(WarningType::MissingResultCount);
        return 0;
    };

    let Some(count) = parse_result_count(&label) else {
        debug!("Result count label '{label}' on {query} has no digits");
        stats.increment_warning(WarningType::MissingResultCount);
        return 0;
    };

    let pages = page_count(count, config.page_size);
    info!("{query}: {count} results across {pages} page(s)");
    pages
}
