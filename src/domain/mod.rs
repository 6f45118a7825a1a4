//! Endpoint catalog, organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — shared enums and re-exports
//! - `wire.rs` — serde request bodies and query parameters
//! - `client.rs` — sub-client with one method per gateway endpoint
//!
//! Records inside `response` (payments, customers, schedules) are passed
//! through as `serde_json::Value`; use [`Envelope::decode`] to map them onto
//! your own types.
//!
//! [`Envelope::decode`]: crate::envelope::Envelope::decode

pub mod certification;
pub mod customer;
pub mod payment;
pub mod receipt;
pub mod subscribe;
pub mod vbank;
