//! Receipts sub-client.

use crate::client::IamportClient;
use crate::domain::receipt::wire::ReceiptRequest;
use crate::envelope::Envelope;
use crate::error::SdkError;

/// Sub-client for cash receipts.
pub struct Receipts<'a> {
    pub(crate) client: &'a IamportClient,
}

impl<'a> Receipts<'a> {
    pub async fn issue(&self, imp_uid: &str, request: &ReceiptRequest) -> Result<Envelope, SdkError> {
        self.client.http.post(&receipt_path(imp_uid), Some(request)).await
    }

    pub async fn get(&self, imp_uid: &str) -> Result<Envelope, SdkError> {
        self.client.http.get(&receipt_path(imp_uid), None::<&()>).await
    }

    pub async fn revoke(&self, imp_uid: &str) -> Result<Envelope, SdkError> {
        self.client.http.delete(&receipt_path(imp_uid), None::<&()>).await
    }
}

fn receipt_path(imp_uid: &str) -> String {
    format!("receipts/{}", urlencoding::encode(imp_uid))
}
