//! Virtual-account request bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST vbanks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VbankRequest {
    pub merchant_uid: String,
    pub amount: u64,
    /// Bank code of the issuing bank.
    pub vbank_code: String,
    /// Deposit deadline (unix seconds).
    pub vbank_due: i64,
    pub vbank_holder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_tel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_url: Option<String>,
}

impl VbankRequest {
    pub fn new(
        merchant_uid: impl Into<String>,
        amount: u64,
        vbank_code: impl Into<String>,
        vbank_due: i64,
        vbank_holder: impl Into<String>,
    ) -> Self {
        Self {
            merchant_uid: merchant_uid.into(),
            amount,
            vbank_code: vbank_code.into(),
            vbank_due,
            vbank_holder: vbank_holder.into(),
            ..Default::default()
        }
    }
}

/// Query for `GET vbanks/holder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct HolderQuery {
    pub bank_code: String,
    pub bank_num: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vbank_request_serialize() {
        let req = VbankRequest::new("order_1", 5000, "004", 1_700_000_000, "상점");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["merchant_uid"], "order_1");
        assert_eq!(json["vbank_code"], "004");
        assert_eq!(json["vbank_due"], 1_700_000_000);
        assert!(json.get("pg").is_none());
    }
}
