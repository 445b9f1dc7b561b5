//! Error type definitions.
//!
//! This module defines the typed errors raised at component seams and the
//! error, warning, and info categories counted during a crawl.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client backing the browser session.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error reading or parsing a selector override file.
    #[error("Selector file error: {0}")]
    SelectorFileError(String),
}

/// Errors raised by the browser seam.
///
/// Everything except `SessionClosed` is recoverable at the page or URL
/// granularity; callers turn those into sentinels or empty collections.
#[derive(Error, Debug)]
pub enum BrowserError {
    /// URL failed syntactic validation; no navigation was attempted.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Navigation did not complete within its timeout.
    #[error("Navigation to {url} timed out after {timeout_ms}ms")]
    NavigationTimeout { url: String, timeout_ms: u128 },

    /// Transport-level navigation failure (DNS, connect, protocol).
    #[error("Navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// The server answered with a non-success status.
    #[error("Navigation to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// A waited-for selector never appeared.
    #[error("Selector '{selector}' not present after {timeout_ms}ms")]
    SelectorTimeout { selector: String, timeout_ms: u128 },

    /// A selector matched nothing on the current document.
    #[error("Selector '{0}' not found")]
    SelectorNotFound(String),

    /// A selector string could not be parsed.
    #[error("Invalid selector '{0}'")]
    InvalidSelector(String),

    /// An operation required a loaded document but the page is blank.
    #[error("No document loaded")]
    NoDocument,

    /// The shared session is gone; nothing else can proceed.
    #[error("Browser session is closed")]
    SessionClosed,
}

impl BrowserError {
    /// Whether the error must terminate the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BrowserError::SessionClosed)
    }

    /// Whether repeating the navigation could plausibly succeed.
    ///
    /// Connect-level failures, 429 and 5xx responses are retried. Timeouts are
    /// not: the navigation budget is already spent.
    pub fn is_retriable(&self) -> bool {
        match self {
            BrowserError::Navigation { source, .. } => source.is_connect(),
            BrowserError::HttpStatus { status, .. } => {
                *status == crate::config::HTTP_STATUS_TOO_MANY_REQUESTS || *status >= 500
            }
            _ => false,
        }
    }
}

/// Errors raised while writing export files.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Types of errors that can occur while crawling.
///
/// Each of these costs the enclosing unit (a page count, one page's harvest,
/// one detail record) its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    NavigationTimeout,
    NavigationError,
    HttpStatusError,
    InvalidUrl,
    SelectorTimeout,
    PageOpenError,
    ExportFailed,
    OtherError,
}

/// Types of warnings that can occur while crawling.
///
/// Warnings indicate a field or collection that resolved to its sentinel or
/// empty value without costing the enclosing unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants start with "Missing"/"Empty" by design
pub enum WarningType {
    MissingResultCount,
    EmptyHarvest,
    MissingName,
    MissingDescription,
    MissingAddress,
    MissingPrice,
    MissingCoordinates,
    MissingEnergyRating,
    MissingTransactionType,
    MissingArea,
    MissingPropertyType,
    MalformedMetadata,
}

/// Types of informational metrics counted during a crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    ConsentAccepted,
    ConsentNotShown,
    /// URL already harvested from an earlier page of the same query.
    DuplicateUrlSuppressed,
    /// Characteristics row whose key was already seen on the page.
    DuplicateCharacteristic,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::NavigationTimeout => "Navigation timeout",
            ErrorType::NavigationError => "Navigation error",
            ErrorType::HttpStatusError => "HTTP status error",
            ErrorType::InvalidUrl => "Invalid URL",
            ErrorType::SelectorTimeout => "Selector wait timeout",
            ErrorType::PageOpenError => "Page context could not be opened",
            ErrorType::ExportFailed => "Export failed",
            ErrorType::OtherError => "Other error",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingResultCount => "Missing result count",
            WarningType::EmptyHarvest => "Results page yielded no links",
            WarningType::MissingName => "Missing name",
            WarningType::MissingDescription => "Missing description",
            WarningType::MissingAddress => "Missing address",
            WarningType::MissingPrice => "Missing price",
            WarningType::MissingCoordinates => "Missing coordinates",
            WarningType::MissingEnergyRating => "Missing energy rating",
            WarningType::MissingTransactionType => "Missing transaction type",
            WarningType::MissingArea => "Missing area",
            WarningType::MissingPropertyType => "Unclassified property type",
            WarningType::MalformedMetadata => "Malformed structured-data block",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::ConsentAccepted => "Cookie consent accepted",
            InfoType::ConsentNotShown => "Cookie consent not shown",
            InfoType::DuplicateUrlSuppressed => "Duplicate URL suppressed",
            InfoType::DuplicateCharacteristic => "Duplicate characteristic discarded",
        }
    }
}
