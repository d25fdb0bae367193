//! Import command handler.
//!
//! Parses the spreadsheet into a catalog, then pushes it to the store.
//! Per-product submission failures are reported in the summary rather than
//! aborting the run.

use std::path::Path;

use tienda_client::submit_catalog;

/// Parse `file` and submit the folded catalog to the store.
///
/// With `dry_run` the catalog is only summarized locally; no configuration
/// or network access is needed.
///
/// # Errors
///
/// Returns an error if the file cannot be parsed or the API client cannot
/// be constructed. Per-product remote failures are printed, not propagated.
pub(crate) async fn run_import(file: &Path, dry_run: bool) -> anyhow::Result<()> {
    let catalog = tienda_import::import_catalog(file)?;

    let edge_count: usize = catalog.values().map(|p| p.compatibles.len()).sum();
    println!(
        "parsed {} products with {} compatibility edges from {}",
        catalog.len(),
        edge_count,
        file.display()
    );

    if dry_run {
        for (code, product) in &catalog {
            println!(
                "  {code}: {} ({} compatibles)",
                product.name,
                product.compatibles.len()
            );
        }
        return Ok(());
    }

    let config = super::load_config()?;
    let client = super::api_client(&config)?;
    let report = submit_catalog(&client, &catalog).await;

    println!(
        "submitted: {} created, {} already existed, {} compatibility lists updated, {} failed",
        report.created,
        report.existing,
        report.patched,
        report.failures.len()
    );
    for failure in &report.failures {
        println!("  {} ({}): {}", failure.code, failure.phase, failure.message);
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "{} of {} products failed to submit",
            report.failures.len(),
            catalog.len()
        ))
    }
}
