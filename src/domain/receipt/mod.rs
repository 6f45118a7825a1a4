//! Cash-receipt domain — issue, fetch, revoke receipts for a payment.

pub mod client;
pub mod wire;

pub use wire::ReceiptRequest;
