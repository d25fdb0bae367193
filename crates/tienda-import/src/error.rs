use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the spreadsheet import pipeline.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The uploaded file has no data rows. Raised before any processing.
    #[error("the uploaded sheet contains no data rows")]
    EmptySheet,

    #[error("unsupported spreadsheet format for {path} (expected .xlsx, .xls or .csv)")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write template: {0}")]
    Template(#[from] rust_xlsxwriter::XlsxError),
}
