//! HTTP-backed browser session.
//!
//! One `reqwest::Client` is the session; each page keeps its own current URL
//! and document, so concurrent tasks never see each other's DOM state. There
//! is no script execution: waiting for a selector re-fetches the document at a
//! fixed interval until it matches or the wait times out.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tokio_retry::RetryIf;

use super::{dom, BrowserSession, PageContext};
use crate::app::validate_url;
use crate::config::{
    DEFAULT_USER_AGENT, NAVIGATION_RETRIES, SELECTOR_POLL_INTERVAL, SELECTOR_POLL_MAX_INTERVAL,
};
use crate::error_handling::{get_retry_strategy, BrowserError, InitializationError};

/// Open-page accounting shared between a session and its pages.
#[derive(Debug, Default)]
struct PageCounters {
    open: AtomicUsize,
    peak: AtomicUsize,
}

impl PageCounters {
    fn acquire(self: &Arc<Self>) -> PageSlot {
        let now_open = self.open.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now_open, Ordering::SeqCst);
        PageSlot {
            counters: Arc::clone(self),
        }
    }
}

/// Holds one open-page slot; returns it when dropped.
#[derive(Debug)]
struct PageSlot {
    counters: Arc<PageCounters>,
}

impl Drop for PageSlot {
    fn drop(&mut self) {
        self.counters.open.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Browser session backed by a shared HTTP client.
#[derive(Debug, Clone)]
pub struct HttpSession {
    client: Client,
    navigation_retries: usize,
    counters: Arc<PageCounters>,
    closed: Arc<AtomicBool>,
}

impl HttpSession {
    /// Creates a session sending `user_agent` on every request.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be
    /// built (e.g. no TLS backend available).
    pub fn new(user_agent: &str, navigation_retries: usize) -> Result<Self, InitializationError> {
        let client = Client::builder()
            .user_agent(user_agent.to_string())
            .build()?;
        Ok(Self::with_client(client, navigation_retries))
    }

    /// Creates a session around an existing client.
    pub fn with_client(client: Client, navigation_retries: usize) -> Self {
        Self {
            client,
            navigation_retries,
            counters: Arc::new(PageCounters::default()),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Pages currently open.
    pub fn open_pages(&self) -> usize {
        self.counters.open.load(Ordering::SeqCst)
    }

    /// Largest number of pages that were ever open at the same time.
    pub fn peak_open_pages(&self) -> usize {
        self.counters.peak.load(Ordering::SeqCst)
    }
}

impl Default for HttpSession {
    fn default() -> Self {
        Self::with_client(
            Client::builder()
                .user_agent(DEFAULT_USER_AGENT)
                .build()
                .unwrap_or_default(),
            NAVIGATION_RETRIES,
        )
    }
}

#[async_trait]
impl BrowserSession for HttpSession {
    async fn new_page(&self) -> Result<Box<dyn PageContext>, BrowserError> {
        if self.is_closed() {
            return Err(BrowserError::SessionClosed);
        }
        Ok(Box::new(HttpPage {
            client: self.client.clone(),
            navigation_retries: self.navigation_retries,
            session_closed: Arc::clone(&self.closed),
            slot: Some(self.counters.acquire()),
            url: None,
            document: None,
            navigation_timeout: Duration::ZERO,
        }))
    }

    async fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            log::debug!(
                "Browser session closed ({} page(s) still open)",
                self.open_pages()
            );
        }
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// One page of an [`HttpSession`].
#[derive(Debug)]
pub struct HttpPage {
    client: Client,
    navigation_retries: usize,
    session_closed: Arc<AtomicBool>,
    slot: Option<PageSlot>,
    url: Option<String>,
    document: Option<String>,
    navigation_timeout: Duration,
}

impl HttpPage {
    fn ensure_usable(&self) -> Result<(), BrowserError> {
        if self.session_closed.load(Ordering::SeqCst) {
            return Err(BrowserError::SessionClosed);
        }
        if self.slot.is_none() {
            return Err(BrowserError::NoDocument);
        }
        Ok(())
    }

    fn document_matches(&self, selector: &Selector) -> bool {
        self.document
            .as_deref()
            .map(|html| dom::matches(&Html::parse_document(html), selector))
            .unwrap_or(false)
    }

    /// Fetches `url`, retrying transient failures, bounded overall by `timeout`.
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<(String, String), BrowserError> {
        let client = &self.client;
        let attempt = || fetch_once(client, url);
        let retried = RetryIf::spawn(
            get_retry_strategy(self.navigation_retries),
            attempt,
            |e: &BrowserError| {
                let retry = e.is_retriable();
                if retry {
                    log::debug!("Retrying navigation after: {e}");
                }
                retry
            },
        );

        match tokio::time::timeout(timeout, retried).await {
            Ok(result) => result,
            Err(_) => Err(BrowserError::NavigationTimeout {
                url: url.to_string(),
                timeout_ms: timeout.as_millis(),
            }),
        }
    }
}

/// One GET: returns the final URL (after redirects) and the body.
async fn fetch_once(client: &Client, url: &str) -> Result<(String, String), BrowserError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| BrowserError::Navigation {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(BrowserError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().to_string();
    let body = response
        .text()
        .await
        .map_err(|source| BrowserError::Navigation {
            url: url.to_string(),
            source,
        })?;
    Ok((final_url, body))
}

#[async_trait]
impl PageContext for HttpPage {
    async fn goto(&mut self, url: &str, timeout: Duration) -> Result<(), BrowserError> {
        self.ensure_usable()?;
        let parsed = validate_url(url)?;

        let started = Instant::now();
        let (final_url, body) = self.fetch(parsed.as_str(), timeout).await?;
        log::trace!(
            "Loaded {} ({} bytes) in {}ms",
            final_url,
            body.len(),
            started.elapsed().as_millis()
        );

        self.url = Some(final_url);
        self.document = Some(body);
        self.navigation_timeout = timeout;
        Ok(())
    }

    async fn wait_for_selector(
        &mut self,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), BrowserError> {
        self.ensure_usable()?;
        let parsed = dom::parse_selector(selector)?;
        let Some(url) = self.url.clone() else {
            return Err(BrowserError::NoDocument);
        };

        let poll = async {
            let mut interval = SELECTOR_POLL_INTERVAL;
            loop {
                if self.document_matches(&parsed) {
                    return;
                }
                tokio::time::sleep(interval).await;
                interval = (interval * 2).min(SELECTOR_POLL_MAX_INTERVAL);
                match self.fetch(&url, self.navigation_timeout.max(timeout)).await {
                    Ok((_, body)) => self.document = Some(body),
                    Err(e) => log::trace!("Re-fetch while waiting for '{selector}' failed: {e}"),
                }
            }
        };

        tokio::time::timeout(timeout, poll)
            .await
            .map_err(|_| BrowserError::SelectorTimeout {
                selector: selector.to_string(),
                timeout_ms: timeout.as_millis(),
            })
    }

    async fn click(&mut self, selector: &str) -> Result<(), BrowserError> {
        self.ensure_usable()?;
        let parsed = dom::parse_selector(selector)?;
        if self.document.is_none() {
            return Err(BrowserError::NoDocument);
        }
        if self.document_matches(&parsed) {
            Ok(())
        } else {
            Err(BrowserError::SelectorNotFound(selector.to_string()))
        }
    }

    async fn content(&self) -> Result<String, BrowserError> {
        self.ensure_usable()?;
        self.document.clone().ok_or(BrowserError::NoDocument)
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    async fn close(&mut self) {
        self.slot.take();
        self.document = None;
    }
}
