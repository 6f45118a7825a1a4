//! Certifications sub-client.

use crate::client::IamportClient;
use crate::envelope::Envelope;
use crate::error::SdkError;

/// Sub-client for identity certifications.
pub struct Certifications<'a> {
    pub(crate) client: &'a IamportClient,
}

impl<'a> Certifications<'a> {
    /// Get the result of an identity certification.
    pub async fn get(&self, imp_uid: &str) -> Result<Envelope, SdkError> {
        let path = format!("certifications/{}", urlencoding::encode(imp_uid));
        self.client.http.get(&path, None::<&()>).await
    }

    /// Delete a stored certification result from the gateway.
    pub async fn delete(&self, imp_uid: &str) -> Result<Envelope, SdkError> {
        let path = format!("certifications/{}", urlencoding::encode(imp_uid));
        self.client.http.delete(&path, None::<&()>).await
    }
}
