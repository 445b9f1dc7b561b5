//! Export types.

use clap::ValueEnum;

/// Export file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Excel workbook with a single `Properties` sheet
    Xlsx,
    /// Comma-separated values, header row first
    Csv,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

/// How records are grouped into files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportMode {
    /// One file per query, named after the query URL
    PerQuery,
    /// One file for the whole run
    Combined,
}
