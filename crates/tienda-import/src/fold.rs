//! Row folding: collapse sheet rows into a deduplicated product catalog
//! with compatibility edges.

use tienda_core::{none_if_empty, Catalog, CompatibleEdge, Product, DEFAULT_IMAGE};
use tracing::debug;

use crate::error::ImportError;
use crate::headers::{classify_headers, CoreColumns, HeaderPlan};
use crate::sheet::Sheet;

/// Classifies the sheet's headers and folds its rows into a catalog.
///
/// # Errors
///
/// Returns [`ImportError::EmptySheet`] if the sheet has no data rows.
pub fn fold_sheet(sheet: &Sheet) -> Result<Catalog, ImportError> {
    let plan = classify_headers(&sheet.headers);
    fold_rows(sheet, &plan)
}

/// Folds rows into products and compatibility edges per the header plan.
///
/// Per row: `Codigo` and `Articulo` are mandatory; rows missing either are
/// skipped entirely. The first row to introduce a code sets its core
/// attributes (first-seen wins); later rows only fill attributes that are
/// still unset and extend the compatibility list. Every non-empty
/// accessory-slot cell guarantees a catalog entry for the referenced code,
/// creating a minimal stub when needed.
///
/// # Errors
///
/// Returns [`ImportError::EmptySheet`] if the sheet has no data rows.
pub fn fold_rows(sheet: &Sheet, plan: &HeaderPlan) -> Result<Catalog, ImportError> {
    if sheet.rows.is_empty() {
        return Err(ImportError::EmptySheet);
    }

    let mut catalog = Catalog::new();
    for (idx, row) in sheet.rows.iter().enumerate() {
        let code = cell(row, plan.core.code);
        let name = cell(row, plan.core.name);
        let (Some(code), Some(name)) = (code, name) else {
            // Data rows start at sheet row 2; +2 keeps the log human-addressable.
            debug!(row = idx + 2, "skipping row without code or name");
            continue;
        };

        if let Some(existing) = catalog.get_mut(&code) {
            merge_unset_core_fields(existing, row, &plan.core);
        } else {
            let product = principal_from_row(code.clone(), name, row, &plan.core);
            catalog.insert(code.clone(), product);
        }

        for slot in &plan.slots {
            let Some(accessory_code) = cell(row, Some(slot.value)) else {
                continue;
            };
            let image = cell(row, slot.image);
            let datasheet = cell(row, slot.datasheet);

            if let Some(accessory) = catalog.get_mut(&accessory_code) {
                backfill_accessory(accessory, image, datasheet.clone());
            } else {
                let stub = accessory_stub(&accessory_code, &slot.base, image, datasheet.clone());
                catalog.insert(accessory_code.clone(), stub);
            }

            if let Some(principal) = catalog.get_mut(&code) {
                principal.add_compatible(CompatibleEdge {
                    code: accessory_code,
                    slot: slot.base.clone(),
                    datasheet,
                });
            }
        }
    }

    Ok(catalog)
}

fn cell(row: &[String], idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i)).and_then(|v| none_if_empty(v))
}

fn principal_from_row(code: String, name: String, row: &[String], core: &CoreColumns) -> Product {
    let mut product = Product::new(code, name);
    product.product_type = cell(row, core.product_type);
    product.brand = cell(row, core.brand);
    product.group = cell(row, core.group);
    product.line = cell(row, core.line);
    product.image = cell(row, core.image);
    product.datasheet = cell(row, core.datasheet);
    product
}

/// Fills core attributes a later row provides for fields still unset.
/// Already-set values are never overwritten (first-seen wins); the image
/// placeholder counts as unset.
fn merge_unset_core_fields(product: &mut Product, row: &[String], core: &CoreColumns) {
    fill_if_unset(&mut product.product_type, cell(row, core.product_type));
    fill_if_unset(&mut product.brand, cell(row, core.brand));
    fill_if_unset(&mut product.group, cell(row, core.group));
    fill_if_unset(&mut product.line, cell(row, core.line));
    if image_missing(product) {
        fill_image(product, cell(row, core.image));
    }
    fill_if_unset(&mut product.datasheet, cell(row, core.datasheet));
}

/// Minimal product for an accessory code seen only through a slot cell:
/// the slot base doubles as a human-readable category, and the name falls
/// back to the code until richer data arrives.
fn accessory_stub(
    code: &str,
    slot_base: &str,
    image: Option<String>,
    datasheet: Option<String>,
) -> Product {
    let mut product = Product::new(code, code);
    product.product_type = Some(slot_base.to_owned());
    product.image = Some(image.unwrap_or_else(|| DEFAULT_IMAGE.to_owned()));
    product.datasheet = datasheet;
    product
}

/// Backfills only the image and datasheet of an existing record, never
/// overwriting non-empty values. The placeholder counts as missing so a
/// later row with a real sibling image can upgrade a stub.
fn backfill_accessory(product: &mut Product, image: Option<String>, datasheet: Option<String>) {
    if image_missing(product) {
        fill_image(product, image);
    }
    fill_if_unset(&mut product.datasheet, datasheet);
}

fn image_missing(product: &Product) -> bool {
    match product.image.as_deref() {
        None => true,
        Some(url) => url == DEFAULT_IMAGE,
    }
}

fn fill_image(product: &mut Product, image: Option<String>) {
    if let Some(url) = image {
        product.image = Some(url);
    }
}

fn fill_if_unset(field: &mut Option<String>, value: Option<String>) {
    if field.is_none() {
        if let Some(v) = value {
            *field = Some(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(headers: &[&str], rows: &[&[&str]]) -> Sheet {
        Sheet {
            headers: headers.iter().map(|h| (*h).to_owned()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| (*c).to_owned()).collect())
                .collect(),
        }
    }

    #[test]
    fn empty_sheet_is_rejected_before_processing() {
        let s = sheet(&["Codigo", "Articulo"], &[]);
        let err = fold_sheet(&s).unwrap_err();
        assert!(matches!(err, ImportError::EmptySheet));
    }

    #[test]
    fn row_without_name_is_skipped_without_failing_the_batch() {
        let s = sheet(
            &["Codigo", "Articulo"],
            &[&["P001", ""], &["P002", "Producto Dos"]],
        );
        let catalog = fold_sheet(&s).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains_key("P002"));
    }

    #[test]
    fn row_without_code_is_skipped() {
        let s = sheet(&["Codigo", "Articulo"], &[&["", "Sin codigo"]]);
        let catalog = fold_sheet(&s).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn single_row_with_slot_and_sibling_image() {
        // Scenario from the import convention: one principal, one accessory
        // introduced through a custom slot column with a sibling image.
        let s = sheet(
            &["Codigo", "Articulo", "Tipo", "Mi Compatible", "Mi Compatible||Imagen"],
            &[&["P001", "Producto Principal", "CATEGORIA", "C001", "http://img"]],
        );
        let catalog = fold_sheet(&s).unwrap();
        assert_eq!(catalog.len(), 2);

        let principal = &catalog["P001"];
        assert_eq!(principal.name, "Producto Principal");
        assert_eq!(principal.product_type.as_deref(), Some("CATEGORIA"));
        assert_eq!(principal.compatibles.len(), 1);
        assert_eq!(principal.compatibles[0].code, "C001");
        assert_eq!(principal.compatibles[0].slot, "Mi Compatible");
        assert!(principal.compatibles[0].datasheet.is_none());

        let accessory = &catalog["C001"];
        assert_eq!(accessory.name, "C001");
        assert_eq!(accessory.product_type.as_deref(), Some("Mi Compatible"));
        assert_eq!(accessory.image.as_deref(), Some("http://img"));
        assert!(accessory.compatibles.is_empty());
    }

    #[test]
    fn every_referenced_accessory_code_gets_a_catalog_entry() {
        let s = sheet(
            &["Codigo", "Articulo", "Conector sup.", "Conector inf."],
            &[
                &["P001", "Uno", "A1", "A2"],
                &["P002", "Dos", "A2", "A3"],
            ],
        );
        let catalog = fold_sheet(&s).unwrap();
        for code in ["P001", "P002", "A1", "A2", "A3"] {
            assert!(catalog.contains_key(code), "missing {code}");
        }
    }

    #[test]
    fn edges_dedup_by_target_code_across_rows() {
        let s = sheet(
            &["Codigo", "Articulo", "Conector sup.", "Conector inf."],
            &[
                &["P001", "Uno", "A1", "A1"],
                &["P001", "Uno", "A1", ""],
            ],
        );
        let catalog = fold_sheet(&s).unwrap();
        let principal = &catalog["P001"];
        assert_eq!(principal.compatibles.len(), 1);
        assert_eq!(principal.compatibles[0].slot, "Conector sup.");
    }

    #[test]
    fn first_seen_core_attributes_win() {
        let s = sheet(
            &["Codigo", "Articulo", "Marca", "Grupo"],
            &[
                &["P001", "Uno", "Hubbell", ""],
                &["P001", "Otro nombre", "Condumex", "Conectores"],
            ],
        );
        let catalog = fold_sheet(&s).unwrap();
        let product = &catalog["P001"];
        assert_eq!(product.name, "Uno");
        assert_eq!(product.brand.as_deref(), Some("Hubbell"));
        // Unset fields may still be filled by a later row.
        assert_eq!(product.group.as_deref(), Some("Conectores"));
    }

    #[test]
    fn stub_keeps_name_and_type_when_code_later_appears_as_principal() {
        let s = sheet(
            &["Codigo", "Articulo", "Marca", "Conector sup."],
            &[
                &["P001", "Uno", "", "A1"],
                &["A1", "Nombre Real", "Hubbell", ""],
            ],
        );
        let catalog = fold_sheet(&s).unwrap();
        let accessory = &catalog["A1"];
        assert_eq!(accessory.name, "A1");
        assert_eq!(accessory.product_type.as_deref(), Some("Conector sup."));
        assert_eq!(accessory.brand.as_deref(), Some("Hubbell"));
    }

    #[test]
    fn stub_without_sibling_image_gets_the_placeholder() {
        let s = sheet(
            &["Codigo", "Articulo", "Conector sup."],
            &[&["P001", "Uno", "A1"]],
        );
        let catalog = fold_sheet(&s).unwrap();
        assert_eq!(catalog["A1"].image.as_deref(), Some(DEFAULT_IMAGE));
    }

    #[test]
    fn backfill_upgrades_placeholder_image_and_missing_datasheet_only() {
        let s = sheet(
            &[
                "Codigo",
                "Articulo",
                "Conector sup.",
                "Conector sup.||Imagen",
                "Conector sup.||Ficha Tecnica",
            ],
            &[
                &["P001", "Uno", "A1", "", ""],
                &["P002", "Dos", "A1", "http://img/a1", "http://pdf/a1"],
                &["P003", "Tres", "A1", "http://img/otro", "http://pdf/otro"],
            ],
        );
        let catalog = fold_sheet(&s).unwrap();
        let accessory = &catalog["A1"];
        // Row 2 upgraded the placeholder; row 3 must not overwrite.
        assert_eq!(accessory.image.as_deref(), Some("http://img/a1"));
        assert_eq!(accessory.datasheet.as_deref(), Some("http://pdf/a1"));
    }

    #[test]
    fn edge_carries_the_sibling_datasheet() {
        let s = sheet(
            &["Codigo", "Articulo", "Conector sup.", "Conector sup.||Ficha Tecnica"],
            &[&["P001", "Uno", "A1", "http://pdf/a1"]],
        );
        let catalog = fold_sheet(&s).unwrap();
        let edge = &catalog["P001"].compatibles[0];
        assert_eq!(edge.datasheet.as_deref(), Some("http://pdf/a1"));
    }

    #[test]
    fn missing_identity_columns_fold_to_an_empty_catalog() {
        let s = sheet(&["Nombre", "Otro"], &[&["x", "y"]]);
        let catalog = fold_sheet(&s).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn unknown_sibling_tagged_columns_are_ignored() {
        let s = sheet(
            &["Codigo", "Articulo", "Huerfana||Imagen"],
            &[&["P001", "Uno", "http://img"]],
        );
        let catalog = fold_sheet(&s).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog["P001"].compatibles.is_empty());
    }
}
