//! # iamport SDK
//!
//! A Rust client for the iamport payment gateway REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — configuration, the response envelope, error types
//! 2. **Auth** — token wire types and the optional in-memory token cache
//! 3. **HTTP** — `IamportHttp`, the token-authenticated request pipeline
//! 4. **Domain** — thin per-resource sub-clients (payments, customers, ...)
//! 5. **High-Level Client** — `IamportClient` with nested sub-clients
//!
//! Every call returns the full gateway [`Envelope`](envelope::Envelope). A
//! nonzero `code` (declined card, already cancelled) is returned as data;
//! only authentication, transport, HTTP-status and decode failures are
//! errors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use iamport::prelude::*;
//!
//! let client = IamportClient::builder()
//!     .configure(|c| {
//!         c.api_key = "API_KEY".into();
//!         c.api_secret = "API_SECRET".into();
//!     })
//!     .build()?;
//!
//! let payment = client.payments().get("imp_123456789012").await?;
//! if payment.is_success() {
//!     println!("{:?}", payment.response);
//! } else {
//!     println!("gateway said {}: {}", payment.code, payment.message());
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Credentials and connection settings.
pub mod config;

/// `{code, message, response}` response envelope.
pub mod envelope;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Token acquisition and caching.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Token-authenticated request pipeline.
pub mod http;

// ── Layer 4: Domain ──────────────────────────────────────────────────────────

/// Endpoint catalog: request bodies and per-resource sub-clients.
pub mod domain;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `IamportClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Core
    pub use crate::config::Config;
    pub use crate::envelope::Envelope;
    pub use crate::error::{AuthError, HttpError, SdkError, SdkResult};
    pub use crate::network::DEFAULT_API_URL;

    // Request types
    pub use crate::domain::customer::{CustomerRequest, ScheduleQuery};
    pub use crate::domain::payment::{CancelRequest, PaymentStatus, PaymentsQuery};
    pub use crate::domain::receipt::ReceiptRequest;
    pub use crate::domain::subscribe::{
        AgainPaymentRequest, OnetimePaymentRequest, Schedule, ScheduleRequest, UnscheduleRequest,
    };
    pub use crate::domain::vbank::VbankRequest;

    // Client + sub-clients
    pub use crate::client::{
        AuthClient, CertificationsClient, CustomersClient, IamportClient, IamportClientBuilder,
        PaymentsClient, ReceiptsClient, SubscribeClient, VbanksClient,
    };
}
