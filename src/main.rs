//! Main application entry point (CLI binary).
//!
//! Thin wrapper around the `property_crawler` library: loads `.env`, parses
//! the command line, initializes logging and prints a summary.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use property_crawler::initialization::init_logger_with;
use property_crawler::{run_crawl, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG and friends may come from a .env file
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_crawl(config).await {
        Ok(report) => {
            println!(
                "✅ Crawled {} quer{} ({} page{}, {} URL{}): {} record{}, {} failed, in {:.1}s",
                report.queries,
                if report.queries == 1 { "y" } else { "ies" },
                report.pages,
                if report.pages == 1 { "" } else { "s" },
                report.urls,
                if report.urls == 1 { "" } else { "s" },
                report.records,
                if report.records == 1 { "" } else { "s" },
                report.failed_extractions,
                report.elapsed_seconds
            );
            for path in &report.output_files {
                println!("Results saved in {}", path.display());
            }
            if report.failed_exports > 0 {
                eprintln!(
                    "⚠️  {} export(s) could not be written; see the log for details",
                    report.failed_exports
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("property_crawler error: {:#}", e);
            process::exit(1);
        }
    }
}
