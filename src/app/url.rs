//! URL validation and page-URL construction.

use url::Url;

use crate::config::PAGE_QUERY_PARAM;
use crate::error_handling::BrowserError;

/// Maximum URL length (2048 characters), matching common browser and server limits.
const MAX_URL_LENGTH: usize = 2048;

/// Validates that `url` is a syntactically well-formed absolute http(s) URL.
///
/// Unlike a browser address bar, nothing is normalized: a missing scheme is an
/// error, not an invitation to prepend `https://`.
///
/// # Errors
///
/// Returns `BrowserError::InvalidUrl` describing why the URL was rejected.
pub fn validate_url(url: &str) -> Result<Url, BrowserError> {
    let invalid = |reason: String| BrowserError::InvalidUrl {
        url: url.chars().take(80).collect(),
        reason,
    };

    if url.len() > MAX_URL_LENGTH {
        return Err(invalid(format!(
            "exceeds maximum length ({} > {MAX_URL_LENGTH})",
            url.len()
        )));
    }

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(parsed),
        "http" | "https" => Err(invalid("missing host".to_string())),
        scheme => Err(invalid(format!("unsupported scheme '{scheme}'"))),
    }
}

/// Whether `url` passes [`validate_url`].
pub fn is_valid_url(url: &str) -> bool {
    validate_url(url).is_ok()
}

/// URL of results page `page_number` (1-based) for `query`.
///
/// Appends `page=N` with `&` when the query already carries a query string,
/// otherwise with `?`.
pub fn page_url(query: &str, page_number: usize) -> String {
    let separator = if query.contains('?') { '&' } else { '?' };
    format!("{query}{separator}{PAGE_QUERY_PARAM}={page_number}")
}

/// Resolves a link `href` found on `base` into an absolute detail-page URL.
///
/// Returns `None` for links that do not lead to another document:
/// fragment-only, `javascript:`, `mailto:`, `tel:` and unparseable hrefs.
pub fn resolve_link(base: Option<&Url>, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    let resolved = match base {
        Some(base) => base.join(href).ok()?,
        None => Url::parse(href).ok()?,
    };
    matches!(resolved.scheme(), "http" | "https").then(|| resolved.to_string())
}
