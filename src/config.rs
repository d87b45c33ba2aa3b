//! Environment configuration. Values come from `.env` or the process
//! environment via `dotenv::var`.

pub const API_URL_VAR: &str = "K9_API_URL";
pub const STORE_URL_VAR: &str = "POCKETBASE_URL";
pub const DEFAULT_API_URL: &str = "https://api.k9crypt.xyz";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    /// Only needed for notifications.
    pub store_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

impl Config {
    pub fn from_env() -> Config {
        let api_url = dotenv::var(API_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let store_url = dotenv::var(STORE_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty());

        Config {
            api_url: normalize_base_url(&api_url),
            store_url: store_url.as_deref().map(normalize_base_url),
        }
    }

    pub fn store_url(&self) -> Result<&str, ConfigError> {
        self.store_url
            .as_deref()
            .ok_or(ConfigError::Missing(STORE_URL_VAR))
    }
}

pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}
