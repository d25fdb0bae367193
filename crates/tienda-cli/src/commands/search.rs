//! Search command handler.

use tienda_client::SearchRequest;

/// Run a catalog search and print one line per result.
///
/// # Errors
///
/// Returns an error if the API client cannot be constructed or the search
/// request fails.
pub(crate) async fn run_search(
    query: String,
    categories: Vec<String>,
    page: u32,
    limit: u32,
) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let client = super::api_client(&config)?;
    let response = client
        .search(&SearchRequest {
            query,
            categories,
            page,
            limit,
        })
        .await?;

    if let Some(matched) = &response.matched_product {
        println!("exact match: {} — {}", matched.code, matched.name);
        if let Some(compatibles) = &response.compatible_products {
            for product in compatibles {
                println!("  compatible: {} — {}", product.code, product.name);
            }
        }
        println!();
    }

    for product in &response.products {
        let kind = product.product_type.as_deref().unwrap_or("-");
        println!("{}  {}  [{kind}]", product.code, product.name);
    }

    println!(
        "\npage {page} of {} ({} products total)",
        response.total_pages, response.total
    );
    if !response.filters.types.is_empty() {
        let facets: Vec<String> = response
            .filters
            .types
            .iter()
            .map(|t| format!("{} ({})", t.name, t.count))
            .collect();
        println!("types: {}", facets.join(", "));
    }

    Ok(())
}
