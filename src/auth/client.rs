//! Auth sub-client — token acquisition and cache control.

use crate::client::IamportClient;
use crate::error::SdkError;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a IamportClient,
}

impl<'a> Auth<'a> {
    /// Exchange the configured key and secret for an access token.
    ///
    /// Fails with [`AuthError`](crate::error::AuthError) when the gateway
    /// issues no token, so a missing token never reaches an
    /// `Authorization` header.
    pub async fn fetch_token(&self) -> Result<String, SdkError> {
        self.client.http.fetch_token().await
    }

    /// Drop the cached token so the next call fetches a new one.
    pub async fn invalidate(&self) {
        self.client.http.invalidate_token().await;
    }

    /// Whether a still-usable token is cached.
    ///
    /// Always `false` unless token caching is enabled.
    pub async fn has_cached_token(&self) -> bool {
        self.client.http.has_cached_token().await
    }
}
