//! Low-level HTTP client — `IamportHttp`.
//!
//! Owns the transport, the configuration, and the optional token cache.
//! Every authenticated call runs the same pipeline: fetch a token, attach it
//! as a bare `Authorization` header, send, and decode the envelope. The full
//! envelope is always returned; a nonzero `code` is data, not an error.

use crate::auth::{AccessToken, TokenRequest, TokenResponse};
use crate::config::{normalize_base_url, Config};
use crate::envelope::Envelope;
use crate::error::{AuthError, HttpError, SdkError};
use crate::network::TOKEN_PATH;

use async_lock::RwLock;
use chrono::Utc;
use reqwest::{header, Client, Method, StatusCode};
use serde::Serialize;
use std::sync::Arc;

/// Low-level HTTP client for the iamport REST API.
pub struct IamportHttp {
    config: Config,
    client: Client,
    /// Cached access token. Only written when `config.cache_tokens` is set.
    token_cache: Arc<RwLock<Option<AccessToken>>>,
}

impl IamportHttp {
    pub fn new(mut config: Config) -> Result<Self, SdkError> {
        config.base_url = normalize_base_url(&config.base_url);
        let client = build_transport(&config)?;
        Ok(Self {
            config,
            client,
            token_cache: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Clones share one token cache until one of them is reconfigured; that
    /// handle then detaches onto a fresh, empty cache while the others keep
    /// the old one. The transport is rebuilt only when the timeout changed.
    pub(crate) fn reconfigure(&mut self, mut config: Config) -> Result<(), SdkError> {
        config.base_url = normalize_base_url(&config.base_url);
        if config.timeout != self.config.timeout {
            self.client = build_transport(&config)?;
        }
        self.config = config;
        self.token_cache = Arc::new(RwLock::new(None));
        Ok(())
    }

    /// Absolute URL for a path relative to the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    // ── Token ────────────────────────────────────────────────────────────

    /// Get an access token for the configured credentials.
    ///
    /// Without token caching this always calls `POST /users/getToken`.
    pub async fn fetch_token(&self) -> Result<String, SdkError> {
        if self.config.cache_tokens {
            if let Some(cached) = self.token_cache.read().await.as_ref() {
                if cached.is_fresh() {
                    tracing::debug!(refresh_at = %cached.refresh_at(), "Reusing cached access token");
                    return Ok(cached.token.clone());
                }
            }
        }

        let (token, resp) = self.request_token().await?;

        if self.config.cache_tokens {
            let entry = AccessToken::from_response(token.clone(), &resp, Utc::now());
            tracing::debug!(refresh_at = %entry.refresh_at(), "Cached new access token");
            *self.token_cache.write().await = Some(entry);
        }

        Ok(token)
    }

    /// Drop the cached token, if any.
    pub async fn invalidate_token(&self) {
        *self.token_cache.write().await = None;
    }

    /// Whether a still-usable token is cached.
    pub async fn has_cached_token(&self) -> bool {
        self.token_cache
            .read()
            .await
            .as_ref()
            .map(|t| t.is_fresh())
            .unwrap_or(false)
    }

    async fn request_token(&self) -> Result<(String, TokenResponse), SdkError> {
        let url = self.url(TOKEN_PATH);
        let body = TokenRequest {
            imp_key: self.config.api_key.clone(),
            imp_secret: self.config.api_secret.clone(),
        };

        let resp = self.client.post(&url).json(&body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        tracing::debug!(method = "POST", path = TOKEN_PATH, status = status.as_u16(), "Token request");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = serde_json::from_str::<Envelope>(&text)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unauthorized").to_string());
            tracing::warn!(status = status.as_u16(), %message, "Token endpoint rejected credentials");
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Token endpoint returned an error status");
            return Err(HttpError::Status {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        let envelope: Envelope<TokenResponse> = serde_json::from_str(&text)?;
        let Envelope {
            code,
            message,
            response,
        } = envelope;

        match response {
            Some(resp) => match resp.access_token.clone().filter(|t| !t.is_empty()) {
                Some(token) => Ok((token, resp)),
                None => {
                    tracing::warn!(code, "Token response carried no usable access_token");
                    Err(AuthError::NoToken { code, message }.into())
                }
            },
            None => {
                tracing::warn!(code, message = message.as_deref().unwrap_or(""), "Token endpoint returned no response");
                Err(AuthError::NoToken { code, message }.into())
            }
        }
    }

    // ── Authenticated dispatch ───────────────────────────────────────────

    /// `GET {base}/{path}` with `query` form-encoded into the query string.
    pub async fn get<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<Envelope, SdkError> {
        self.send_authenticated::<Q, ()>(Method::GET, path, query, None)
            .await
    }

    /// `POST {base}/{path}` with an optional JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<Envelope, SdkError> {
        self.send_authenticated::<(), B>(Method::POST, path, None, body)
            .await
    }

    /// `DELETE {base}/{path}` with an optional JSON body.
    pub async fn delete<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<Envelope, SdkError> {
        self.send_authenticated::<(), B>(Method::DELETE, path, None, body)
            .await
    }

    async fn send_authenticated<Q: Serialize + ?Sized, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Envelope, SdkError> {
        let token = self.fetch_token().await?;

        let url = self.url(path);
        let mut req = self
            .client
            .request(method.clone(), &url)
            .header(header::AUTHORIZATION, token);

        if let Some(q) = query {
            req = req.query(q);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        tracing::debug!(method = %method, path, status = status.as_u16(), "Gateway request");

        let text = resp.text().await?;
        if !status.is_success() {
            tracing::warn!(method = %method, path, status = status.as_u16(), "Gateway returned an error status");
            return Err(HttpError::Status {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        let envelope: Envelope = serde_json::from_str(&text)?;
        if !envelope.is_success() {
            tracing::debug!(code = envelope.code, path, "Gateway reported a business failure");
        }
        Ok(envelope)
    }
}

impl Clone for IamportHttp {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            client: self.client.clone(),
            token_cache: self.token_cache.clone(),
        }
    }
}

fn build_transport(config: &Config) -> Result<Client, SdkError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );

    Client::builder()
        .timeout(config.timeout)
        .pool_max_idle_per_host(10)
        .default_headers(headers)
        .build()
        .map_err(|e| SdkError::InvalidConfig(format!("Failed to build HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_url_joins_relative_paths() {
        let http = IamportHttp::new(Config {
            base_url: "https://api.iamport.kr/".to_string(),
            ..Config::default()
        })
        .unwrap();
        assert_eq!(http.base_url(), "https://api.iamport.kr");
        assert_eq!(http.url("payments/imp_1"), "https://api.iamport.kr/payments/imp_1");
        assert_eq!(http.url("/payments/imp_1"), "https://api.iamport.kr/payments/imp_1");
    }

    #[test]
    fn test_reconfigure_replaces_config() {
        let mut http = IamportHttp::new(Config::default()).unwrap();
        let cache_before = Arc::as_ptr(&http.token_cache);

        http.reconfigure(Config {
            timeout: Duration::from_secs(5),
            ..Config::new("KEY", "SECRET")
        })
        .unwrap();

        assert_eq!(http.config().api_key, "KEY");
        assert_eq!(http.config().timeout, Duration::from_secs(5));
        assert_ne!(Arc::as_ptr(&http.token_cache), cache_before);
    }

    #[test]
    fn test_clones_share_cache_until_reconfigured() {
        let mut http = IamportHttp::new(Config::default()).unwrap();
        let clone = http.clone();
        assert!(Arc::ptr_eq(&http.token_cache, &clone.token_cache));

        http.reconfigure(Config::new("KEY", "SECRET")).unwrap();
        assert!(!Arc::ptr_eq(&http.token_cache, &clone.token_cache));
        assert_eq!(clone.config().api_key, "");
    }

    #[tokio::test]
    async fn test_invalidate_token_clears_cache() {
        let http = IamportHttp::new(Config {
            cache_tokens: true,
            ..Config::default()
        })
        .unwrap();
        let resp = TokenResponse {
            access_token: Some("T".to_string()),
            now: Some(0),
            expired_at: Some(1800),
        };
        *http.token_cache.write().await =
            Some(AccessToken::from_response("T".to_string(), &resp, Utc::now()));
        assert!(http.has_cached_token().await);

        http.invalidate_token().await;
        assert!(!http.has_cached_token().await);
    }
}
