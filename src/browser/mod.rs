//! Browser seam.
//!
//! The crawler drives pages through two traits: a [`BrowserSession`] shared by
//! every task of a run, and the [`PageContext`]s it hands out, each owned by
//! exactly one task for its lifetime. [`HttpSession`] is the bundled
//! implementation; anything that can navigate, wait for selectors and return
//! the serialized DOM can stand in for it.

pub mod dom;
mod http;

use std::time::Duration;

use async_trait::async_trait;

use crate::error_handling::BrowserError;

pub use http::{HttpPage, HttpSession};

/// One isolated page (tab) inside a browser session.
///
/// Implementations must release the page's slot in the session when dropped,
/// so a task that fails or is cancelled never leaks an open page.
#[async_trait]
pub trait PageContext: Send {
    /// Loads `url`, replacing the current document.
    async fn goto(&mut self, url: &str, timeout: Duration) -> Result<(), BrowserError>;

    /// Resolves once `selector` matches the current document, or fails with
    /// `SelectorTimeout` after `timeout`.
    async fn wait_for_selector(&mut self, selector: &str, timeout: Duration)
        -> Result<(), BrowserError>;

    /// Clicks the first element matching `selector`.
    async fn click(&mut self, selector: &str) -> Result<(), BrowserError>;

    /// Serialized HTML of the current document.
    async fn content(&self) -> Result<String, BrowserError>;

    /// URL of the current document, after redirects.
    fn url(&self) -> Option<&str>;

    /// Releases the page. Further use fails with `NoDocument`.
    async fn close(&mut self);
}

/// A browser shared read/write by every concurrent task of a run.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    /// Opens a fresh, isolated page context.
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::SessionClosed` once the session is gone.
    async fn new_page(&self) -> Result<Box<dyn PageContext>, BrowserError>;

    /// Shuts the session down; pages opened afterwards fail.
    async fn close(&self);

    fn is_closed(&self) -> bool;
}
