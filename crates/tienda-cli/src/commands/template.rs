//! Template command handler.

use std::path::Path;

/// Write the import template workbook to `out`.
///
/// # Errors
///
/// Returns an error if the workbook cannot be written.
pub(crate) fn run_template(out: &Path) -> anyhow::Result<()> {
    tienda_import::write_template(out)?;
    println!("template written to {}", out.display());
    Ok(())
}
