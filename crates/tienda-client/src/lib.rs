//! Typed HTTP client for the remote Product API, plus the two-pass
//! submission driver used by the bulk import.

mod client;
mod error;
mod submit;
mod types;

pub use client::ProductApiClient;
pub use error::ClientError;
pub use submit::{submit_catalog, SubmitFailure, SubmitPhase, SubmitReport};
pub use types::{
    ProductDetail, ProductsResponse, SearchFilters, SearchRequest, SearchResponse, TypeCount,
};
