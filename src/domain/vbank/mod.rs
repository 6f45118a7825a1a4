//! Virtual-account domain — issue, look up holder, revoke.

pub mod client;
pub mod wire;

pub use wire::VbankRequest;
