//! Two-pass submission of a folded catalog to the remote Product API.
//!
//! Compatibility edges must reference products that already exist remotely,
//! so submission is modeled as an explicit two-phase batch: every create
//! completes before any compatibility patch is issued. Remote calls are
//! sequential and independent; a failed call is logged and recorded but
//! never aborts the batch. No retries, no rollback — a batch import is
//! inherently non-atomic.

use std::fmt;

use tracing::{debug, info, warn};

use tienda_core::{Catalog, Product, DEFAULT_IMAGE};

use crate::client::ProductApiClient;
use crate::error::ClientError;

/// Which pass a failed remote call belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Create,
    Patch,
}

impl fmt::Display for SubmitPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitPhase::Create => write!(f, "create"),
            SubmitPhase::Patch => write!(f, "patch"),
        }
    }
}

/// One product whose create or patch call failed.
#[derive(Debug)]
pub struct SubmitFailure {
    pub code: String,
    pub phase: SubmitPhase,
    pub message: String,
}

/// Outcome of a catalog submission.
#[derive(Debug, Default)]
pub struct SubmitReport {
    /// Products created in pass 1.
    pub created: usize,
    /// Products that already existed and were left untouched.
    pub existing: usize,
    /// Compatibility lists replaced in pass 2.
    pub patched: usize,
    pub failures: Vec<SubmitFailure>,
}

impl SubmitReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Pushes `catalog` to the remote API: existence check + create for every
/// product, then a compatibility patch for every product with edges.
///
/// Per-product failures are captured in the returned report; the function
/// itself never fails. Running the same catalog twice creates nothing on
/// the second run and leaves identical compatibility lists.
pub async fn submit_catalog(client: &ProductApiClient, catalog: &Catalog) -> SubmitReport {
    let mut report = SubmitReport::default();

    for (code, product) in catalog {
        match client.product_exists(code).await {
            Ok(true) => {
                debug!(code = %code, "product already exists, leaving untouched");
                report.existing += 1;
            }
            Ok(false) => match client.create_product(&create_payload(product)).await {
                Ok(()) => {
                    debug!(code = %code, "created product");
                    report.created += 1;
                }
                Err(e) => fail(&mut report, code, SubmitPhase::Create, &e),
            },
            Err(e) => fail(&mut report, code, SubmitPhase::Create, &e),
        }
    }

    for (code, product) in catalog {
        if product.compatibles.is_empty() {
            continue;
        }
        match client.update_compatibles(code, &product.compatibles).await {
            Ok(()) => report.patched += 1,
            Err(e) => fail(&mut report, code, SubmitPhase::Patch, &e),
        }
    }

    info!(
        created = report.created,
        existing = report.existing,
        patched = report.patched,
        failed = report.failures.len(),
        "catalog submission finished"
    );
    report
}

fn fail(report: &mut SubmitReport, code: &str, phase: SubmitPhase, error: &ClientError) {
    warn!(
        code = %code,
        phase = %phase,
        error = %error,
        "remote call failed, continuing with remaining products"
    );
    report.failures.push(SubmitFailure {
        code: code.to_owned(),
        phase,
        message: error.to_string(),
    });
}

/// Create payload for pass 1: the image is defaulted to the placeholder if
/// still unset, and edges are withheld — remote compatibility state is
/// owned entirely by the pass-2 patch.
fn create_payload(product: &Product) -> Product {
    let mut payload = product.clone();
    if payload.image.is_none() {
        payload.image = Some(DEFAULT_IMAGE.to_owned());
    }
    payload.compatibles = Vec::new();
    payload
}
