//! Shared domain types, application configuration, and the client-side
//! cart store for the `tienda` catalog tooling.

mod app_config;
mod cart;
mod config;
mod product;

pub use app_config::AppConfig;
pub use cart::{CartError, CartItem, CartStore};
pub use config::{load_app_config, load_app_config_from_env};
pub use product::{none_if_empty, Catalog, CompatibleEdge, Product, DEFAULT_IMAGE};

use thiserror::Error;

/// Errors produced while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
