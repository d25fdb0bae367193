pub(crate) mod cart;
pub(crate) mod create;
pub(crate) mod import;
pub(crate) mod search;
pub(crate) mod show;
pub(crate) mod template;

use tienda_client::ProductApiClient;
use tienda_core::AppConfig;

/// Loads the store configuration from the environment.
pub(crate) fn load_config() -> anyhow::Result<AppConfig> {
    Ok(tienda_core::load_app_config_from_env()?)
}

/// Builds the API client from the loaded configuration.
pub(crate) fn api_client(config: &AppConfig) -> anyhow::Result<ProductApiClient> {
    ProductApiClient::new(
        &config.api_base_url,
        config.http_timeout_secs,
        &config.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build product API client: {e}"))
}
