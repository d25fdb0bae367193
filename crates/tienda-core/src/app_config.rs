use std::path::PathBuf;

/// Settings for the commands that talk to the store or the cart file.
///
/// Fully offline operations (template generation, dry-run imports) never
/// construct this.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote Product API, e.g. `https://backend.example.com/api`.
    pub api_base_url: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    /// Path of the persisted cart file.
    pub cart_path: PathBuf,
}
