//! High-level client — `IamportClient` with nested sub-client accessors.
//!
//! Each resource has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the configuration entry points, and the
//! accessor methods.

use crate::auth::client::Auth;
use crate::config::Config;
use crate::domain::certification::client::Certifications;
use crate::domain::customer::client::Customers;
use crate::domain::payment::client::Payments;
use crate::domain::receipt::client::Receipts;
use crate::domain::subscribe::client::Subscribe;
use crate::domain::vbank::client::Vbanks;
use crate::envelope::Envelope;
use crate::error::SdkError;
use crate::http::IamportHttp;

use serde::Serialize;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::certification::client::Certifications as CertificationsClient;
pub use crate::domain::customer::client::Customers as CustomersClient;
pub use crate::domain::payment::client::Payments as PaymentsClient;
pub use crate::domain::receipt::client::Receipts as ReceiptsClient;
pub use crate::domain::subscribe::client::Subscribe as SubscribeClient;
pub use crate::domain::vbank::client::Vbanks as VbanksClient;

/// The primary entry point for the iamport SDK.
///
/// Provides nested sub-client accessors for each resource:
/// `client.payments()`, `client.customers()`, etc.
pub struct IamportClient {
    pub(crate) http: IamportHttp,
}

impl IamportClient {
    pub fn builder() -> IamportClientBuilder {
        IamportClientBuilder::default()
    }

    /// Create a client for the given credentials with default settings.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self, SdkError> {
        Self::builder().credentials(api_key, api_secret).build()
    }

    /// Create a client from `IAMPORT_API_KEY` / `IAMPORT_API_SECRET`.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::builder().config(Config::from_env()).build()
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        self.http.config()
    }

    /// Mutate the configuration in place.
    ///
    /// Drops any cached token, since it belongs to the old credentials.
    pub fn configure<F>(&mut self, f: F) -> Result<(), SdkError>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.http.config().clone();
        f(&mut config);
        self.http.reconfigure(config)
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn payments(&self) -> Payments<'_> {
        Payments { client: self }
    }

    pub fn subscribe(&self) -> Subscribe<'_> {
        Subscribe { client: self }
    }

    pub fn customers(&self) -> Customers<'_> {
        Customers { client: self }
    }

    pub fn vbanks(&self) -> Vbanks<'_> {
        Vbanks { client: self }
    }

    pub fn receipts(&self) -> Receipts<'_> {
        Receipts { client: self }
    }

    pub fn certifications(&self) -> Certifications<'_> {
        Certifications { client: self }
    }

    // ── Raw authenticated dispatch ───────────────────────────────────────

    /// Authenticated `GET` against any gateway path.
    pub async fn get<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<Envelope, SdkError> {
        self.http.get(path, query).await
    }

    /// Authenticated `POST` against any gateway path.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<Envelope, SdkError> {
        self.http.post(path, body).await
    }

    /// Authenticated `DELETE` against any gateway path.
    pub async fn delete<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<Envelope, SdkError> {
        self.http.delete(path, body).await
    }
}

impl Clone for IamportClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct IamportClientBuilder {
    config: Config,
}

impl IamportClientBuilder {
    /// Start from an existing configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn credentials(mut self, api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        self.config.api_key = api_key.into();
        self.config.api_secret = api_secret.into();
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout = Duration::from_secs(secs);
        self
    }

    /// Reuse access tokens until shortly before they expire.
    pub fn cache_tokens(mut self, enabled: bool) -> Self {
        self.config.cache_tokens = enabled;
        self
    }

    /// Mutate the configuration through a callback.
    pub fn configure<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut Config),
    {
        f(&mut self.config);
        self
    }

    pub fn build(self) -> Result<IamportClient, SdkError> {
        Ok(IamportClient {
            http: IamportHttp::new(self.config)?,
        })
    }
}
