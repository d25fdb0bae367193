//! Product API request and response types.
//!
//! All types model the JSON structures exchanged with the remote Product
//! API. Wire names that are not valid or idiomatic Rust identifiers
//! (`totalPages`, `matchedProduct`, `compatibleWith`, …) are mapped with
//! serde renames.

use serde::{Deserialize, Serialize};

use tienda_core::Product;

/// Body of `POST /products/search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    /// Product types to restrict the result to; empty means no restriction.
    pub categories: Vec<String>,
    pub page: u32,
    pub limit: u32,
}

/// Response of `POST /products/search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub products: Vec<Product>,
    #[serde(default)]
    pub filters: SearchFilters,
    pub total: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    /// Present when the query matched one product exactly.
    #[serde(default, rename = "matchedProduct")]
    pub matched_product: Option<Product>,
    /// Accessories of the matched product, resolved remotely.
    #[serde(default, rename = "compatibleProducts")]
    pub compatible_products: Option<Vec<Product>>,
}

/// Faceted type counts accompanying a search result.
#[derive(Debug, Default, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub types: Vec<TypeCount>,
}

/// One facet entry: a product type and how many results carry it.
#[derive(Debug, Deserialize)]
pub struct TypeCount {
    pub name: String,
    pub count: u32,
}

/// Response of `GET /products/code?code=<code>`.
#[derive(Debug, Deserialize)]
pub struct ProductDetail {
    pub product: Product,
    /// Products this one declares as compatible accessories.
    #[serde(default)]
    pub compatibles: Vec<Product>,
    /// Reverse lookup: products declaring this one as an accessory.
    #[serde(default, rename = "compatibleWith")]
    pub compatible_with: Vec<Product>,
}

/// Response of the legacy `GET /products` full-list endpoint.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    pub total: u32,
}
