//! Client configuration — credentials and connection settings.
//!
//! A [`Config`] is owned by each [`IamportClient`](crate::client::IamportClient);
//! there is no process-wide state. Nothing is validated here: empty
//! credentials are accepted and the gateway rejects them when the first
//! token is requested.

use std::fmt;
use std::time::Duration;

use crate::network::DEFAULT_API_URL;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the REST API key.
pub const ENV_API_KEY: &str = "IAMPORT_API_KEY";
/// Environment variable holding the REST API secret.
pub const ENV_API_SECRET: &str = "IAMPORT_API_SECRET";
/// Environment variable overriding the base URL.
pub const ENV_API_URL: &str = "IAMPORT_API_URL";

/// Credentials plus connection settings for an iamport client.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// REST API key (`imp_key`).
    pub api_key: String,
    /// REST API secret (`imp_secret`).
    pub api_secret: String,
    /// Gateway base URL, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to every request, token requests included.
    pub timeout: Duration,
    /// Keep the access token in memory until shortly before it expires.
    ///
    /// Off by default: every authenticated call fetches a fresh token.
    pub cache_tokens: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache_tokens: false,
        }
    }
}

impl Config {
    /// Create a config with the given credentials and default settings.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            ..Default::default()
        }
    }

    /// Read credentials from `IAMPORT_API_KEY` / `IAMPORT_API_SECRET`.
    ///
    /// `IAMPORT_API_URL` overrides the base URL when set. Missing variables
    /// keep their default values.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            config.api_key = key;
        }
        if let Ok(secret) = std::env::var(ENV_API_SECRET) {
            config.api_secret = secret;
        }
        if let Ok(url) = std::env::var(ENV_API_URL) {
            config.base_url = normalize_base_url(&url);
        }
        config
    }

    /// Whether both credential fields are non-empty.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("cache_tokens", &self.cache_tokens)
            .finish()
    }
}

pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
