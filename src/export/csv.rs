//! CSV export.

use std::path::Path;

use csv::Writer;

use super::row::{record_to_row, COLUMNS};
use crate::error_handling::ExportError;
use crate::models::PropertyRecord;

/// Writes `records` to `path` as CSV, header first.
///
/// # Errors
///
/// Returns `ExportError::Csv` if the file cannot be created or written.
pub fn export_csv(records: &[PropertyRecord], path: &Path) -> Result<usize, ExportError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.write_record(record_to_row(record))?;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_csv_quotes_delimited_cells() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.csv");
        let mut record = PropertyRecord::unavailable("https://x.dk/adresse/1");
        record.address = "Nyhavn 71, 1051 København K".to_string();

        assert_eq!(export_csv(&[record], &path).expect("export"), 1);

        let mut reader = csv::Reader::from_path(&path).expect("reader");
        let headers = reader.headers().expect("headers").clone();
        assert_eq!(headers.len(), COLUMNS.len());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "Nyhavn 71, 1051 København K");
    }

    #[test]
    fn test_export_csv_header_only() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("empty.csv");
        assert_eq!(export_csv(&[], &path).expect("export"), 0);

        let contents = std::fs::read_to_string(&path).expect("read");
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.starts_with("name,description,address"));
    }
}
