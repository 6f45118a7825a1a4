//! Payments sub-client — lookup, search, cancel, prepare.

use crate::client::IamportClient;
use crate::domain::payment::wire::{CancelRequest, PaymentsQuery, PrepareRequest};
use crate::domain::payment::PaymentStatus;
use crate::envelope::Envelope;
use crate::error::SdkError;

/// Sub-client for payment operations.
pub struct Payments<'a> {
    pub(crate) client: &'a IamportClient,
}

impl<'a> Payments<'a> {
    /// Get a payment by its gateway-assigned `imp_uid`.
    pub async fn get(&self, imp_uid: &str) -> Result<Envelope, SdkError> {
        let path = format!("payments/{}", urlencoding::encode(imp_uid));
        self.client.http.get(&path, None::<&()>).await
    }

    /// Search payments by status, page, and optional time range.
    pub async fn list(&self, query: &PaymentsQuery) -> Result<Envelope, SdkError> {
        self.client.http.get(&query.to_path(), None::<&()>).await
    }

    /// Get the most recent payment for a merchant-assigned id.
    pub async fn find(&self, merchant_uid: &str) -> Result<Envelope, SdkError> {
        self.client.http.get(&find_path(merchant_uid), None::<&()>).await
    }

    /// Get every payment for a merchant-assigned id, optionally by status.
    pub async fn find_all(
        &self,
        merchant_uid: &str,
        status: Option<PaymentStatus>,
    ) -> Result<Envelope, SdkError> {
        let mut path = format!("payments/findAll/{}", urlencoding::encode(merchant_uid));
        if let Some(s) = status {
            path = format!("{}/{}", path, s);
        }
        self.client.http.get(&path, None::<&()>).await
    }

    /// Cancel a payment in full or in part.
    ///
    /// Cancelling an already-cancelled payment is not an error: the gateway
    /// answers with a nonzero `code`, returned as-is.
    pub async fn cancel(&self, request: &CancelRequest) -> Result<Envelope, SdkError> {
        self.client.http.post("payments/cancel", Some(request)).await
    }

    /// Register the expected amount for a merchant id before checkout.
    pub async fn prepare(&self, merchant_uid: &str, amount: u64) -> Result<Envelope, SdkError> {
        let body = PrepareRequest {
            merchant_uid: merchant_uid.to_string(),
            amount,
        };
        self.client.http.post("payments/prepare", Some(&body)).await
    }

    /// Get the prepared amount registered for a merchant id.
    pub async fn get_prepared(&self, merchant_uid: &str) -> Result<Envelope, SdkError> {
        let path = format!("payments/prepare/{}", urlencoding::encode(merchant_uid));
        self.client.http.get(&path, None::<&()>).await
    }
}

pub(crate) fn find_path(merchant_uid: &str) -> String {
    format!("payments/find/{}", urlencoding::encode(merchant_uid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_path_plain() {
        assert_eq!(find_path("M00001"), "payments/find/M00001");
    }

    #[test]
    fn test_find_path_encodes_reserved_characters() {
        let path = find_path("M 00001/x");
        assert_eq!(path, "payments/find/M%2000001%2Fx");

        let segment = path.rsplit('/').next().unwrap();
        assert_eq!(urlencoding::decode(segment).unwrap(), "M 00001/x");
    }
}
