//! Configuration types and CLI options.
//!
//! This module defines the enums and the `Config` struct used for command-line
//! argument parsing and for programmatic use of the library.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::*;
use crate::config::selectors::Selectors;
use crate::export::{ExportFormat, ExportMode};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Crawl configuration.
///
/// Parsed from the command line by the binary, or constructed directly by
/// library users.
///
/// # Examples
///
/// ```no_run
/// use property_crawler::Config;
///
/// let config = Config {
///     queries: vec!["https://www.boligsiden.dk/tilsalg/husbaad".to_string()],
///     concurrency: 5,
///     ..Default::default()
/// };
/// ```
///
/// ```bash
/// property_crawler https://www.boligsiden.dk/tilsalg/husbaad --format csv
/// property_crawler --file queries.txt --concurrency 5 --export-mode combined
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "property_crawler",
    about = "Crawls listing searches and exports every property detail page."
)]
pub struct Config {
    /// Search-results URLs to crawl
    #[arg(value_name = "QUERY_URL")]
    pub queries: Vec<String>,

    /// File with one search-results URL per line (`#` starts a comment)
    #[arg(long, value_parser)]
    pub file: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Directory export files are written to (created if missing)
    #[arg(long, value_parser, default_value = OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Export format: xlsx|csv
    #[arg(long, value_enum, default_value_t = ExportFormat::Xlsx)]
    pub format: ExportFormat,

    /// One file per query, or one combined file for the whole run
    #[arg(long, value_enum, default_value_t = ExportMode::PerQuery)]
    pub export_mode: ExportMode,

    /// Detail pages extracted concurrently per batch
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Listings shown per results page
    #[arg(long, default_value_t = RESULTS_PAGE_SIZE)]
    pub page_size: usize,

    /// Results-page navigation timeout in seconds
    #[arg(long, default_value_t = NAVIGATION_TIMEOUT_SECS)]
    pub navigation_timeout_secs: u64,

    /// Detail-page navigation timeout in seconds
    #[arg(long, default_value_t = DETAIL_TIMEOUT_SECS)]
    pub detail_timeout_secs: u64,

    /// How long to wait for the listing container in seconds
    #[arg(long, default_value_t = LISTING_WAIT_SECS)]
    pub listing_wait_secs: u64,

    /// How long to wait for the cookie-consent button in seconds
    #[arg(long, default_value_t = CONSENT_TIMEOUT_SECS)]
    pub consent_timeout_secs: u64,

    /// How long to wait for the transaction-type label in seconds
    #[arg(long, default_value_t = TRANSACTION_TYPE_TIMEOUT_SECS)]
    pub transaction_type_timeout_secs: u64,

    /// Retries for connect-level navigation failures
    #[arg(long, default_value_t = NAVIGATION_RETRIES)]
    pub navigation_retries: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// JSON file overriding CSS selectors
    #[arg(long, value_parser)]
    pub selectors_file: Option<PathBuf>,

    /// Skip the characteristics table (and therefore the area field)
    #[arg(long)]
    pub no_characteristics: bool,

    /// Unit token identifying the area entry among characteristics
    #[arg(long, default_value = AREA_UNIT_TOKEN)]
    pub area_unit: String,

    /// Resolved selectors (defaults, or loaded from `selectors_file`)
    #[arg(skip)]
    pub selectors: Selectors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            queries: Vec::new(),
            file: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output_dir: PathBuf::from(OUTPUT_DIR),
            format: ExportFormat::Xlsx,
            export_mode: ExportMode::PerQuery,
            concurrency: DEFAULT_CONCURRENCY,
            page_size: RESULTS_PAGE_SIZE,
            navigation_timeout_secs: NAVIGATION_TIMEOUT_SECS,
            detail_timeout_secs: DETAIL_TIMEOUT_SECS,
            listing_wait_secs: LISTING_WAIT_SECS,
            consent_timeout_secs: CONSENT_TIMEOUT_SECS,
            transaction_type_timeout_secs: TRANSACTION_TYPE_TIMEOUT_SECS,
            navigation_retries: NAVIGATION_RETRIES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            selectors_file: None,
            no_characteristics: false,
            area_unit: AREA_UNIT_TOKEN.to_string(),
            selectors: Selectors::default(),
        }
    }
}

impl Config {
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    pub fn detail_timeout(&self) -> Duration {
        Duration::from_secs(self.detail_timeout_secs)
    }

    pub fn listing_wait(&self) -> Duration {
        Duration::from_secs(self.listing_wait_secs)
    }

    pub fn consent_timeout(&self) -> Duration {
        Duration::from_secs(self.consent_timeout_secs)
    }

    pub fn transaction_type_timeout(&self) -> Duration {
        Duration::from_secs(self.transaction_type_timeout_secs)
    }

    /// Batch width, never below one.
    pub fn batch_width(&self) -> usize {
        self.concurrency.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_default_matches_cli_defaults() {
        let parsed = Config::parse_from(["property_crawler", "https://example.com/search"]);
        let default = Config::default();

        assert_eq!(parsed.queries, vec!["https://example.com/search".to_string()]);
        assert_eq!(parsed.concurrency, default.concurrency);
        assert_eq!(parsed.page_size, default.page_size);
        assert_eq!(parsed.output_dir, default.output_dir);
        assert_eq!(parsed.format, default.format);
        assert_eq!(parsed.export_mode, default.export_mode);
        assert_eq!(parsed.navigation_timeout_secs, default.navigation_timeout_secs);
        assert_eq!(parsed.detail_timeout_secs, default.detail_timeout_secs);
        assert_eq!(
            parsed.transaction_type_timeout_secs,
            default.transaction_type_timeout_secs
        );
        assert_eq!(parsed.area_unit, default.area_unit);
        assert_eq!(parsed.selectors, default.selectors);
    }

    #[test]
    fn test_batch_width_never_zero() {
        let config = Config {
            concurrency: 0,
            ..Default::default()
        };
        assert_eq!(config.batch_width(), 1);
    }

    #[test]
    fn test_transaction_type_timeout_is_finite() {
        let config = Config::default();
        assert_eq!(
            config.transaction_type_timeout(),
            Duration::from_secs(TRANSACTION_TYPE_TIMEOUT_SECS)
        );
    }
}
