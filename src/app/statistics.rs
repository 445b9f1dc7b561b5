//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};

/// Prints error, warning, and info statistics to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    let total_warnings = error_stats.total_warnings();
    let total_info = error_stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_warnings > 0 {
        info!("Warning Counts ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            let count = error_stats.get_warning_count(warning_type);
            if count > 0 {
                info!("   {}: {}", warning_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = error_stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}

/// Logs the one-line end-of-run summary.
pub fn print_simple_summary(records: usize, failed: usize, files: usize, elapsed_seconds: f64) {
    info!(
        "✅ Extracted {} record{} ({} failed) into {} file{} in {:.1}s",
        records,
        if records == 1 { "" } else { "s" },
        failed,
        files,
        if files == 1 { "" } else { "s" },
        elapsed_seconds
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_statistics_no_errors() {
        let stats = ProcessingStats::new();
        print_error_statistics(&stats);
    }

    #[test]
    fn test_print_error_statistics_all_types() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::NavigationTimeout);
        stats.increment_warning(WarningType::MissingEnergyRating);
        stats.increment_info(InfoType::ConsentAccepted);
        print_error_statistics(&stats);
    }

    #[test]
    fn test_print_simple_summary() {
        print_simple_summary(1, 0, 1, 0.5);
        print_simple_summary(150, 2, 3, 12.0);
    }
}
