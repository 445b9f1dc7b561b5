//! URL harvester: detail-page links on one results page.

use log::{debug, info, warn};
use scraper::Html;
use url::Url;

use crate::app::{resolve_link, validate_url};
use crate::browser::{dom, PageContext};
use crate::config::Config;
use crate::error_handling::{update_error_stats, ProcessingStats, WarningType};
use crate::models::UrlSet;

/// Absolute, distinct detail URLs linked by `selector` in `document`.
///
/// Relative hrefs are resolved against `base`; links that do not lead to a
/// document are dropped. Order is first appearance.
pub fn collect_links(document: &Html, base: Option<&Url>, selector: &str) -> UrlSet {
    dom::select_all_attr(document, selector, "href", "listing links")
        .iter()
        .filter_map(|href| resolve_link(base, href))
        .collect()
}

/// Loads one results page and collects the detail URLs it lists.
///
/// A malformed `page_url` is rejected without navigating. Navigation
/// failures and a listing container that never appears both yield an empty
/// set.
pub async fn harvest_page(
    page: &mut dyn PageContext,
    page_url: &str,
    config: &Config,
    stats: &ProcessingStats,
) -> UrlSet {
    if let Err(e) = validate_url(page_url) {
        warn!("Skipping results page: {e}");
        update_error_stats(stats, &e);
        return UrlSet::new();
    }

    if let Err(e) = page.goto(page_url, config.navigation_timeout()).await {
        warn!("Failed to load results page {page_url}: {e}");
        update_error_stats(stats, &e);
        stats.increment_warning(WarningType::EmptyHarvest);
        return UrlSet::new();
    }

    let selectors = &config.selectors;
    if let Err(e) = page
        .wait_for_selector(&selectors.listing_container, config.listing_wait())
        .await
    {
        warn!("No listings on {page_url}: {e}");
        update_error_stats(stats, &e);
        stats.increment_warning(WarningType::EmptyHarvest);
        return UrlSet::new();
    }

    let html = match page.content().await {
        Ok(html) => html,
        Err(e) => {
            warn!("Failed to read results page {page_url}: {e}");
            update_error_stats(stats, &e);
            return UrlSet::new();
        }
    };

    let base = page.url().and_then(|u| Url::parse(u).ok());
    let urls = {
        let document = Html::parse_document(&html);
        collect_links(&document, base.as_ref(), &selectors.listing_links())
    };

    if urls.is_empty() {
        debug!("Listing container on {page_url} holds no links");
        stats.increment_warning(WarningType::EmptyHarvest);
    } else {
        info!("Harvested {} URL(s) from {page_url}", urls.len());
    }
    urls
}
