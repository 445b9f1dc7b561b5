//! Tabular export of crawled records.
//!
//! Records are written as CSV or XLSX under the output directory, one file per
//! query or one combined file per run.

mod csv;
mod path;
mod row;
mod types;
mod xlsx;

use std::path::{Path, PathBuf};

use log::info;

use crate::error_handling::ExportError;
use crate::models::PropertyRecord;

pub use self::csv::export_csv;
pub use path::{output_path, sanitize_file_name};
pub use row::{record_to_row, COLUMNS};
pub use types::{ExportFormat, ExportMode};
pub use xlsx::export_xlsx;

/// Writes `records` to `<dir>/<stem>.<ext>`, creating `dir` if needed.
///
/// Zero records still produce a file with the header row.
///
/// # Errors
///
/// Returns `ExportError::Io` if the directory cannot be created, or the
/// format-specific error if writing fails.
pub fn export_records(
    records: &[PropertyRecord],
    dir: &Path,
    stem: &str,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let path = output_path(dir, stem, format);
    let written = match format {
        ExportFormat::Csv => export_csv(records, &path)?,
        ExportFormat::Xlsx => export_xlsx(records, &path)?,
    };
    info!("Wrote {} record(s) to {}", written, path.display());
    Ok(path)
}
