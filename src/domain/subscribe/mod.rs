//! Subscription-payment domain — off-session charges and scheduled billing.

pub mod client;
pub mod wire;

pub use wire::{
    AgainPaymentRequest, OnetimePaymentRequest, Schedule, ScheduleRequest, UnscheduleRequest,
};
