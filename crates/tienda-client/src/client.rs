//! HTTP client for the remote Product API.
//!
//! Wraps `reqwest` with typed endpoints, a normalized base URL, and
//! API-specific error handling. Absence of a product is signaled by the
//! backend with HTTP 404 and surfaced as [`ClientError::NotFound`] so the
//! import's existence probe can distinguish it from real failures.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::Serialize;

use tienda_core::{CompatibleEdge, Product};

use crate::error::ClientError;
use crate::types::{ProductDetail, ProductsResponse, SearchRequest, SearchResponse};

/// Client for the remote Product API.
///
/// Constructed with an explicit base URL so tests can point it at a mock
/// server.
pub struct ProductApiClient {
    client: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct CompatiblesBody<'a> {
    compatibles: &'a [CompatibleEdge],
}

impl ProductApiClient {
    /// Creates a new client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: exactly one trailing slash so joined paths extend the
        // base path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ClientError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Creates one product. The backend defines no response payload beyond
    /// success or failure.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on network failure or a non-2xx status.
    pub async fn create_product(&self, product: &Product) -> Result<(), ClientError> {
        let url = self.endpoint(&["products"]);
        self.client
            .post(url)
            .json(product)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Fetches one product by code, including its compatibility relations.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotFound`] if the backend answers 404.
    /// - [`ClientError::Http`] on network failure or other non-2xx status.
    /// - [`ClientError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn get_by_code(&self, code: &str) -> Result<ProductDetail, ClientError> {
        let mut url = self.endpoint(&["products", "code"]);
        url.query_pairs_mut().append_pair("code", code);

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                code: code.to_owned(),
            });
        }
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: format!("get_by_code(code={code})"),
            source: e,
        })
    }

    /// Existence probe built on [`Self::get_by_code`]: 404 means `false`,
    /// any other failure propagates.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] or [`ClientError::Deserialize`] for
    /// failures other than absence.
    pub async fn product_exists(&self, code: &str) -> Result<bool, ClientError> {
        match self.get_by_code(code).await {
            Ok(_) => Ok(true),
            Err(ClientError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Replaces a product's compatibility edge list (no merge semantics).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on network failure or a non-2xx status.
    pub async fn update_compatibles(
        &self,
        code: &str,
        compatibles: &[CompatibleEdge],
    ) -> Result<(), ClientError> {
        let url = self.endpoint(&["products", "code", code, "compatibles"]);
        self.client
            .patch(url)
            .json(&CompatiblesBody { compatibles })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Searches the catalog with pagination and type facets. An empty query
    /// with empty categories returns the unfiltered catalog page.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or non-2xx status.
    /// - [`ClientError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError> {
        let url = self.endpoint(&["products", "search"]);
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: format!("search(query={})", request.query),
            source: e,
        })
    }

    /// Fetches the full unfiltered product list (legacy endpoint).
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or non-2xx status.
    /// - [`ClientError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn list_products(&self) -> Result<ProductsResponse, ClientError> {
        let url = self.endpoint(&["products"]);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: "list_products".to_owned(),
            source: e,
        })
    }

    /// Appends path segments to the base URL with proper percent-encoding.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut parts) = url.path_segments_mut() {
            parts.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> ProductApiClient {
        ProductApiClient::new(base_url, 30, "tienda/0.1 (test)")
            .expect("client construction should not fail")
    }

    #[test]
    fn endpoint_joins_segments_onto_the_base_path() {
        let client = test_client("https://backend.example.com/api");
        let url = client.endpoint(&["products", "search"]);
        assert_eq!(url.as_str(), "https://backend.example.com/api/products/search");
    }

    #[test]
    fn endpoint_strips_extra_trailing_slash() {
        let client = test_client("https://backend.example.com/api/");
        let url = client.endpoint(&["products"]);
        assert_eq!(url.as_str(), "https://backend.example.com/api/products");
    }

    #[test]
    fn endpoint_percent_encodes_path_segments() {
        let client = test_client("https://backend.example.com/api");
        let url = client.endpoint(&["products", "code", "CX 01/A", "compatibles"]);
        assert_eq!(
            url.as_str(),
            "https://backend.example.com/api/products/code/CX%2001%2FA/compatibles"
        );
    }

    #[test]
    fn invalid_base_url_is_an_api_error() {
        let result = ProductApiClient::new("not a url", 30, "tienda/0.1 (test)");
        assert!(matches!(result, Err(ClientError::ApiError(_))));
    }
}
