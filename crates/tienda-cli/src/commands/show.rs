//! Show command handler.

/// Print one product with its compatibility relations.
///
/// # Errors
///
/// Returns an error if the API client cannot be constructed, the product
/// does not exist, or the lookup fails.
pub(crate) async fn run_show(code: &str) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let client = super::api_client(&config)?;
    let detail = client.get_by_code(code).await?;
    let product = &detail.product;

    println!("{}  {}", product.code, product.name);
    if let Some(kind) = &product.product_type {
        println!("  type:      {kind}");
    }
    if let Some(brand) = &product.brand {
        println!("  brand:     {brand}");
    }
    if let Some(group) = &product.group {
        println!("  group:     {group}");
    }
    if let Some(line) = &product.line {
        println!("  line:      {line}");
    }
    if let Some(price) = product.price {
        println!("  price:     {price:.2}");
    }
    if let Some(stock) = product.stock {
        println!("  stock:     {stock}");
    }
    if let Some(datasheet) = &product.datasheet {
        println!("  datasheet: {datasheet}");
    }

    if !detail.compatibles.is_empty() {
        println!("compatibles:");
        for accessory in &detail.compatibles {
            println!("  {} — {}", accessory.code, accessory.name);
        }
    }
    if !detail.compatible_with.is_empty() {
        println!("compatible with:");
        for principal in &detail.compatible_with {
            println!("  {} — {}", principal.code, principal.name);
        }
    }

    Ok(())
}
