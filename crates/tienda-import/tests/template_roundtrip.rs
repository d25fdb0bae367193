//! End-to-end template round trip: generate the example workbook, read it
//! back through the import pipeline, and check the folded catalog.

use tienda_import::{fold_sheet, import_catalog, write_template, Sheet};

#[test]
fn written_template_imports_as_one_principal_and_one_accessory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("plantilla_productos.xlsx");
    write_template(&path).expect("template should be written");

    let catalog = import_catalog(&path).expect("template should import cleanly");
    assert_eq!(catalog.len(), 2, "expected exactly principal + accessory");

    let principal = &catalog["CX-01"];
    assert_eq!(principal.name, "Cable X1");
    assert_eq!(principal.product_type.as_deref(), Some("CABLE"));
    assert_eq!(principal.brand.as_deref(), Some("Condumex"));
    assert_eq!(principal.compatibles.len(), 1);
    assert_eq!(principal.compatibles[0].code, "YA25");
    assert_eq!(principal.compatibles[0].slot, "Conector mecanico 1");
    assert_eq!(
        principal.compatibles[0].datasheet.as_deref(),
        Some("https://example.com/ya25.pdf")
    );

    let accessory = &catalog["YA25"];
    assert_eq!(accessory.name, "YA25");
    assert_eq!(accessory.product_type.as_deref(), Some("Conector mecanico 1"));
    assert_eq!(accessory.image.as_deref(), Some("https://example.com/ya25.png"));
    assert!(accessory.compatibles.is_empty());
}

#[test]
fn template_data_folds_identically_without_touching_disk() {
    let sheet = Sheet {
        headers: tienda_import::template_headers(),
        rows: vec![tienda_import::template_row()],
    };
    let catalog = fold_sheet(&sheet).expect("fold should succeed");
    assert!(catalog.contains_key("CX-01"));
    assert!(catalog.contains_key("YA25"));
}
