//! Billing-customer domain — stored cards used for repeat and scheduled charges.

pub mod client;
pub mod wire;

pub use wire::{CustomerRequest, ScheduleQuery};
