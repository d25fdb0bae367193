use thiserror::Error;

/// Errors returned by the Product API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// HTTP status other than the not-found probe.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote store has no product with this code.
    #[error("no product with code {code}")]
    NotFound { code: String },

    /// The client itself was misconfigured (e.g. an unparseable base URL).
    #[error("product API error: {0}")]
    ApiError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
