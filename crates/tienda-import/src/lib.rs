//! Spreadsheet import normalizer for the product catalog.
//!
//! Turns a tabular file (rows of key/value cells describing products and
//! their compatible accessories) into a deduplicated [`tienda_core::Catalog`]
//! ready for submission to the remote Product API. Also generates the
//! downloadable example template encoding the expected header convention.

use std::path::Path;

use tienda_core::Catalog;

mod error;
pub mod fold;
pub mod headers;
pub mod sheet;
pub mod template;

pub use error::ImportError;
pub use fold::{fold_rows, fold_sheet};
pub use headers::{classify_headers, normalize_header, CoreColumns, HeaderPlan, SlotColumns};
pub use sheet::{read_sheet, Sheet};
pub use template::{template_headers, template_row, write_template, TEMPLATE_SLOT};

/// Reads the first sheet of `path` and folds it into a catalog.
///
/// # Errors
///
/// Returns [`ImportError::EmptySheet`] for a sheet with no data rows, or the
/// underlying read error for unreadable/unsupported files.
pub fn import_catalog(path: &Path) -> Result<Catalog, ImportError> {
    let sheet = sheet::read_sheet(path)?;
    fold::fold_sheet(&sheet)
}
