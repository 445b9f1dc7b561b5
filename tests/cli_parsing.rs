//! Tests for command-line parsing into `Config`.

use std::path::PathBuf;

use clap::Parser;
use property_crawler::config::{LogFormat, LogLevel, RESULTS_PAGE_SIZE};
use property_crawler::{Config, ExportFormat, ExportMode};

#[test]
fn test_defaults() {
    let config = Config::parse_from(["property_crawler", "https://www.boligsiden.dk/tilsalg/husbaad"]);

    assert_eq!(config.queries, vec!["https://www.boligsiden.dk/tilsalg/husbaad".to_string()]);
    assert_eq!(config.concurrency, 10);
    assert_eq!(config.page_size, RESULTS_PAGE_SIZE);
    assert_eq!(config.format, ExportFormat::Xlsx);
    assert_eq!(config.export_mode, ExportMode::PerQuery);
    assert_eq!(config.output_dir, PathBuf::from("output"));
    assert_eq!(config.navigation_timeout_secs, 20);
    assert_eq!(config.listing_wait_secs, 60);
    assert_eq!(config.consent_timeout_secs, 5);
    assert!(!config.no_characteristics);
    assert!(matches!(config.log_level, LogLevel::Info));
    assert!(matches!(config.log_format, LogFormat::Plain));
}

#[test]
fn test_all_flags() {
    let config = Config::parse_from([
        "property_crawler",
        "https://a.example/search",
        "https://b.example/search?type=villa",
        "--file",
        "queries.txt",
        "--format",
        "csv",
        "--export-mode",
        "combined",
        "--concurrency",
        "4",
        "--transaction-type-timeout-secs",
        "2",
        "--selectors-file",
        "selectors.json",
        "--no-characteristics",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--area-unit",
        "sqm",
    ]);

    assert_eq!(config.queries.len(), 2);
    assert_eq!(config.file, Some(PathBuf::from("queries.txt")));
    assert_eq!(config.format, ExportFormat::Csv);
    assert_eq!(config.export_mode, ExportMode::Combined);
    assert_eq!(config.batch_width(), 4);
    assert_eq!(config.transaction_type_timeout().as_secs(), 2);
    assert_eq!(config.selectors_file, Some(PathBuf::from("selectors.json")));
    assert!(config.no_characteristics);
    assert_eq!(config.area_unit, "sqm");
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_zero_concurrency_still_runs_one_at_a_time() {
    let config = Config::parse_from(["property_crawler", "--concurrency", "0"]);
    assert_eq!(config.batch_width(), 1);
}

#[test]
fn test_invalid_format_rejected() {
    let result = Config::try_parse_from(["property_crawler", "--format", "parquet"]);
    assert!(result.is_err());
}
