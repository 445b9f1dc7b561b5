//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, browser seam, export)
//! - Processing statistics tracking (errors, warnings, info metrics)
//! - Retry strategy configuration
//! - Error categorization
//!
//! Counted categories:
//! - **Errors**: Failures that cost a unit (page count, harvest, record) its result
//! - **Warnings**: Fields or collections that resolved to a sentinel/empty value
//! - **Info**: Notable events (consent handling, suppressed duplicates)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_browser_error, get_retry_strategy, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{BrowserError, ErrorType, ExportError, InfoType, InitializationError, WarningType};
