use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Reads the store configuration, sourcing a `.env` file first if present.
///
/// # Errors
///
/// Returns [`ConfigError`] when `TIENDA_API_BASE_URL` is absent or an
/// optional variable holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Reads the store configuration from the process environment as-is,
/// without touching `.env` files. Callers that source `.env` themselves
/// (the CLI does this once at startup) use this variant.
///
/// # Errors
///
/// Same conditions as [`load_app_config`].
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Parses and validates the configuration against an arbitrary variable
/// source. Taking the lookup as a closure keeps the logic testable with a
/// plain `HashMap`, with no process-environment mutation in tests.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base_url = require("TIENDA_API_BASE_URL")?;
    let http_timeout_secs = parse_u64("TIENDA_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("TIENDA_USER_AGENT", "tienda/0.1 (catalog-import)");
    let cart_path = PathBuf::from(or_default("TIENDA_CART_PATH", "./cart.json"));

    Ok(AppConfig {
        api_base_url,
        http_timeout_secs,
        user_agent,
        cart_path,
    })
}
