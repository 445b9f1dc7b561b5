//! Cookie-consent dismissal.

use std::time::Duration;

use log::debug;

use crate::browser::PageContext;
use crate::error_handling::{InfoType, ProcessingStats};

/// Waits for the consent button and clicks it.
///
/// Best-effort: returns `true` if the overlay was dismissed, `false` if it
/// never appeared or could not be clicked. Never fails the caller.
pub async fn accept_cookies(
    page: &mut dyn PageContext,
    selector: &str,
    timeout: Duration,
    stats: &ProcessingStats,
) -> bool {
    if let Err(e) = page.wait_for_selector(selector, timeout).await {
        debug!("No consent overlay: {e}");
        stats.increment_info(InfoType::ConsentNotShown);
        return false;
    }

    match page.click(selector).await {
        Ok(()) => {
            debug!("Accepted cookies");
            stats.increment_info(InfoType::ConsentAccepted);
            true
        }
        Err(e) => {
            debug!("Could not click consent button: {e}");
            stats.increment_info(InfoType::ConsentNotShown);
            false
        }
    }
}
