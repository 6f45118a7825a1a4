//! Authentication — token wire types and the in-memory token cache.
//!
//! ## Token lifecycle
//!
//! - The gateway exchanges `imp_key`/`imp_secret` for an access token at
//!   `POST /users/getToken`. The token request itself carries no
//!   `Authorization` header.
//! - By default the SDK fetches a new token for every authenticated call and
//!   never stores it.
//! - With [`Config::cache_tokens`](crate::config::Config::cache_tokens) the
//!   token is kept in memory until [`EXPIRY_MARGIN_SECS`] before the
//!   gateway-reported expiry. Nothing is ever persisted.

pub mod client;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Seconds before the reported expiry at which a cached token is refreshed.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

// ============================================================================
// Wire types
// ============================================================================

/// Body of `POST /users/getToken`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRequest {
    pub imp_key: String,
    pub imp_secret: String,
}

/// `response` payload of the token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    /// Gateway clock at issue time (unix seconds).
    #[serde(default)]
    pub now: Option<i64>,
    /// Expiry on the gateway clock (unix seconds).
    #[serde(default)]
    pub expired_at: Option<i64>,
}

// ============================================================================
// Cached token
// ============================================================================

/// An access token together with the local instant it stops being reused.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub(crate) token: String,
    pub(crate) refresh_at: DateTime<Utc>,
}

impl AccessToken {
    /// Build a cache entry from a token response received at `received_at`.
    ///
    /// The remaining lifetime is `expired_at - now` on the gateway clock,
    /// which sidesteps skew between the gateway and the local clock. A
    /// response without timing fields is never reused.
    pub fn from_response(token: String, resp: &TokenResponse, received_at: DateTime<Utc>) -> Self {
        let lifetime = match (resp.now, resp.expired_at) {
            (Some(now), Some(expired_at)) => expired_at.saturating_sub(now),
            _ => 0,
        };
        let usable = lifetime.saturating_sub(EXPIRY_MARGIN_SECS).max(0);
        Self {
            token,
            refresh_at: received_at + Duration::seconds(usable),
        }
    }

    /// Whether the token may still be sent at `at`.
    pub fn is_fresh_at(&self, at: DateTime<Utc>) -> bool {
        at < self.refresh_at
    }

    /// Whether the token may still be sent now.
    pub fn is_fresh(&self) -> bool {
        self.is_fresh_at(Utc::now())
    }

    /// Local time after which the token is refetched.
    pub fn refresh_at(&self) -> DateTime<Utc> {
        self.refresh_at
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<redacted>")
            .field("refresh_at", &self.refresh_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    #[test]
    fn test_token_request_serialize() {
        let req = TokenRequest {
            imp_key: "API_KEY".to_string(),
            imp_secret: "API_SECRET".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"imp_key":"API_KEY","imp_secret":"API_SECRET"}"#);
    }

    #[test]
    fn test_token_response_deserialize() {
        let json = r#"{"access_token":"NEW_TOKEN","now":1000,"expired_at":2800}"#;
        let resp: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token.as_deref(), Some("NEW_TOKEN"));
        assert_eq!(resp.now, Some(1000));
        assert_eq!(resp.expired_at, Some(2800));
    }

    #[test]
    fn test_token_response_without_timing() {
        let resp: TokenResponse = serde_json::from_str(r#"{"access_token":"T"}"#).unwrap();
        assert!(resp.now.is_none());
        assert!(resp.expired_at.is_none());
    }

    #[test]
    fn test_access_token_lifetime_uses_gateway_clock() {
        // Gateway clock is far off from the local one; only the difference counts.
        let resp = TokenResponse {
            access_token: Some("T".to_string()),
            now: Some(5_000_000),
            expired_at: Some(5_001_800),
        };
        let token = AccessToken::from_response("T".to_string(), &resp, at(100));
        assert_eq!(token.refresh_at(), at(100 + 1800 - EXPIRY_MARGIN_SECS));
        assert!(token.is_fresh_at(at(100)));
        assert!(token.is_fresh_at(at(1839)));
        assert!(!token.is_fresh_at(at(1840)));
    }

    #[test]
    fn test_access_token_without_timing_is_never_fresh() {
        let resp = TokenResponse {
            access_token: Some("T".to_string()),
            now: None,
            expired_at: None,
        };
        let token = AccessToken::from_response("T".to_string(), &resp, at(100));
        assert!(!token.is_fresh_at(at(100)));
    }

    #[test]
    fn test_access_token_debug_redacts() {
        let resp = TokenResponse {
            access_token: Some("secret-token".to_string()),
            now: Some(0),
            expired_at: Some(1800),
        };
        let token = AccessToken::from_response("secret-token".to_string(), &resp, at(0));
        assert!(!format!("{:?}", token).contains("secret-token"));
    }
}
