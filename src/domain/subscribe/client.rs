//! Subscribe sub-client — one-time charges, repeat charges, schedules.

use crate::client::IamportClient;
use crate::domain::subscribe::wire::{
    AgainPaymentRequest, OnetimePaymentRequest, ScheduleRequest, UnscheduleRequest,
};
use crate::envelope::Envelope;
use crate::error::SdkError;

/// Sub-client for subscription payments.
pub struct Subscribe<'a> {
    pub(crate) client: &'a IamportClient,
}

impl<'a> Subscribe<'a> {
    /// Charge a card once, off-session, from raw card details.
    pub async fn onetime(&self, request: &OnetimePaymentRequest) -> Result<Envelope, SdkError> {
        self.client
            .http
            .post("subscribe/payments/onetime", Some(request))
            .await
    }

    /// Charge a registered billing customer again.
    pub async fn again(&self, request: &AgainPaymentRequest) -> Result<Envelope, SdkError> {
        self.client
            .http
            .post("subscribe/payments/again", Some(request))
            .await
    }

    /// Schedule future charges for a billing customer.
    pub async fn schedule(&self, request: &ScheduleRequest) -> Result<Envelope, SdkError> {
        self.client
            .http
            .post("subscribe/payments/schedule", Some(request))
            .await
    }

    /// Remove scheduled charges. An empty `merchant_uid` list removes all.
    pub async fn unschedule(&self, request: &UnscheduleRequest) -> Result<Envelope, SdkError> {
        self.client
            .http
            .post("subscribe/payments/unschedule", Some(request))
            .await
    }
}
