//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (page size, timeouts, retry backoff, etc.)
//! - CSS locator configuration
//! - CLI option types and parsing

mod constants;
mod selectors;
mod types;

// Re-export all constants
pub use constants::*;
pub use selectors::Selectors;
pub use types::{Config, LogFormat, LogLevel};
