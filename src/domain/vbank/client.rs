//! Vbanks sub-client.

use crate::client::IamportClient;
use crate::domain::vbank::wire::{HolderQuery, VbankRequest};
use crate::envelope::Envelope;
use crate::error::SdkError;

/// Sub-client for virtual accounts.
pub struct Vbanks<'a> {
    pub(crate) client: &'a IamportClient,
}

impl<'a> Vbanks<'a> {
    /// Issue a virtual account for a pending payment.
    pub async fn create(&self, request: &VbankRequest) -> Result<Envelope, SdkError> {
        self.client.http.post("vbanks", Some(request)).await
    }

    /// Look up the holder name of a bank account.
    pub async fn holder(&self, bank_code: &str, bank_num: &str) -> Result<Envelope, SdkError> {
        let query = HolderQuery {
            bank_code: bank_code.to_string(),
            bank_num: bank_num.to_string(),
        };
        self.client.http.get("vbanks/holder", Some(&query)).await
    }

    /// Revoke an issued, unpaid virtual account.
    pub async fn revoke(&self, imp_uid: &str) -> Result<Envelope, SdkError> {
        let path = format!("vbanks/{}", urlencoding::encode(imp_uid));
        self.client.http.delete(&path, None::<&()>).await
    }
}
