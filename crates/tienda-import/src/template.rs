//! Generator for the downloadable example template.
//!
//! Pure and stateless: `template_headers`/`template_row` define the
//! canonical layout, and `write_template` serializes it to an `.xlsx`
//! workbook. No network interaction.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::error::ImportError;
use crate::headers::{
    BRAND_HEADER, CODE_HEADER, DATASHEET_HEADER, DATASHEET_TAG, GROUP_HEADER, IMAGE_HEADER,
    IMAGE_TAG, LINE_HEADER, NAME_HEADER, SIBLING_SEPARATOR, TYPE_HEADER,
};

/// Example accessory-slot base used in the template.
pub const TEMPLATE_SLOT: &str = "Conector mecanico 1";

const TEMPLATE_SHEET_NAME: &str = "Plantilla";

/// The template's header row: all core columns plus one example slot with
/// its two sibling columns.
#[must_use]
pub fn template_headers() -> Vec<String> {
    [
        CODE_HEADER,
        NAME_HEADER,
        TYPE_HEADER,
        BRAND_HEADER,
        GROUP_HEADER,
        LINE_HEADER,
        IMAGE_HEADER,
        DATASHEET_HEADER,
    ]
    .into_iter()
    .map(str::to_owned)
    .chain([
        TEMPLATE_SLOT.to_owned(),
        format!("{TEMPLATE_SLOT}{SIBLING_SEPARATOR}{IMAGE_TAG}"),
        format!("{TEMPLATE_SLOT}{SIBLING_SEPARATOR}{DATASHEET_TAG}"),
    ])
    .collect()
}

/// One illustrative data row matching [`template_headers`].
#[must_use]
pub fn template_row() -> Vec<String> {
    [
        "CX-01",
        "Cable X1",
        "CABLE",
        "Condumex",
        "Cables",
        "Alta",
        "https://example.com/cx-01.png",
        "https://example.com/cx-01.pdf",
        "YA25",
        "https://example.com/ya25.png",
        "https://example.com/ya25.pdf",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

/// Writes the example template workbook to `path`.
///
/// # Errors
///
/// Returns [`ImportError::Template`] if the workbook cannot be written.
pub fn write_template(path: &Path) -> Result<(), ImportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(TEMPLATE_SHEET_NAME)?;
    write_row(worksheet, 0, &template_headers())?;
    write_row(worksheet, 1, &template_row())?;
    workbook.save(path)?;
    Ok(())
}

fn write_row(worksheet: &mut Worksheet, row: u32, values: &[String]) -> Result<(), XlsxError> {
    for (col, value) in values.iter().enumerate() {
        worksheet.write_string(row, u16::try_from(col).unwrap_or(u16::MAX), value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_and_row_have_matching_width() {
        assert_eq!(template_headers().len(), template_row().len());
    }

    #[test]
    fn template_encodes_the_sibling_convention() {
        let headers = template_headers();
        assert!(headers.contains(&"Conector mecanico 1||Imagen".to_owned()));
        assert!(headers.contains(&"Conector mecanico 1||Ficha Tecnica".to_owned()));
    }
}
