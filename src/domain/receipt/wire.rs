//! Cash-receipt request bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST receipts/{imp_uid}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRequest {
    /// Phone number, business registration number, or card number.
    pub identifier: String,
    /// `person`, `business`, `phone`, `taxcard`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<String>,
    /// `person` (income deduction) or `company` (expense proof).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub receipt_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_tel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_free: Option<u64>,
}

impl ReceiptRequest {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, receipt_type: impl Into<String>) -> Self {
        self.receipt_type = Some(receipt_type.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_type_is_renamed() {
        let req = ReceiptRequest::new("01000000001").with_type("person");
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"identifier":"01000000001","type":"person"}"#
        );
    }
}
