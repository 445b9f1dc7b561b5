//! XLSX export.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use super::row::{record_to_row, COLUMNS};
use crate::config::XLSX_SHEET_NAME;
use crate::error_handling::ExportError;
use crate::models::PropertyRecord;

/// Writes `records` to `path` as a workbook with one `Properties` sheet.
///
/// # Errors
///
/// Returns `ExportError::Xlsx` if a cell cannot be written or the workbook
/// cannot be saved.
pub fn export_xlsx(records: &[PropertyRecord], path: &Path) -> Result<usize, ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(XLSX_SHEET_NAME)?;

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, cell) in record_to_row(record).iter().enumerate() {
            worksheet.write_string(row, col as u16, cell)?;
        }
    }

    worksheet.autofit();
    workbook.save(path)?;
    Ok(records.len())
}
