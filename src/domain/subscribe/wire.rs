//! Subscription-payment request bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST subscribe/payments/onetime`.
///
/// When `customer_uid` is set the gateway also registers the card under
/// that billing customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnetimePaymentRequest {
    pub merchant_uid: String,
    pub amount: u64,
    pub card_number: String,
    /// `YYYY-MM`.
    pub expiry: String,
    /// Date of birth (`YYMMDD`) or business registration number.
    pub birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwd_2digit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_tel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_quota: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_url: Option<String>,
}

impl OnetimePaymentRequest {
    pub fn new(
        merchant_uid: impl Into<String>,
        amount: u64,
        card_number: impl Into<String>,
        expiry: impl Into<String>,
        birth: impl Into<String>,
    ) -> Self {
        Self {
            merchant_uid: merchant_uid.into(),
            amount,
            card_number: card_number.into(),
            expiry: expiry.into(),
            birth: birth.into(),
            ..Default::default()
        }
    }
}

/// Body of `POST subscribe/payments/again`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgainPaymentRequest {
    pub customer_uid: String,
    pub merchant_uid: String,
    pub amount: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_free: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_tel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_quota: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_url: Option<String>,
}

impl AgainPaymentRequest {
    pub fn new(
        customer_uid: impl Into<String>,
        merchant_uid: impl Into<String>,
        amount: u64,
        name: impl Into<String>,
    ) -> Self {
        Self {
            customer_uid: customer_uid.into(),
            merchant_uid: merchant_uid.into(),
            amount,
            name: name.into(),
            ..Default::default()
        }
    }
}

/// One future charge inside a [`ScheduleRequest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub merchant_uid: String,
    /// Charge time (unix seconds).
    pub schedule_at: i64,
    pub amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_tel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Value>,
}

impl Schedule {
    pub fn new(merchant_uid: impl Into<String>, schedule_at: i64, amount: u64) -> Self {
        Self {
            merchant_uid: merchant_uid.into(),
            schedule_at,
            amount,
            ..Default::default()
        }
    }
}

/// Body of `POST subscribe/payments/schedule`.
///
/// Card fields are only needed when the customer is not registered yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub customer_uid: String,
    pub schedules: Vec<Schedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checking_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwd_2digit: Option<String>,
}

impl ScheduleRequest {
    pub fn new(customer_uid: impl Into<String>, schedules: Vec<Schedule>) -> Self {
        Self {
            customer_uid: customer_uid.into(),
            schedules,
            ..Default::default()
        }
    }
}

/// Body of `POST subscribe/payments/unschedule`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnscheduleRequest {
    pub customer_uid: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub merchant_uid: Vec<String>,
}

impl UnscheduleRequest {
    /// Remove every scheduled charge for the customer.
    pub fn all(customer_uid: impl Into<String>) -> Self {
        Self {
            customer_uid: customer_uid.into(),
            merchant_uid: Vec::new(),
        }
    }

    /// Remove only the listed scheduled charges.
    pub fn only(customer_uid: impl Into<String>, merchant_uids: Vec<String>) -> Self {
        Self {
            customer_uid: customer_uid.into(),
            merchant_uid: merchant_uids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_onetime_request_serialize() {
        let req = OnetimePaymentRequest::new("xxxxx", 11_111, "dddd-dddd-dddd-ddddd", "yyy-mm", "dddddd");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            json!({
                "merchant_uid": "xxxxx",
                "amount": 11111,
                "card_number": "dddd-dddd-dddd-ddddd",
                "expiry": "yyy-mm",
                "birth": "dddddd",
            })
        );
    }

    #[test]
    fn test_again_request_serialize() {
        let req = AgainPaymentRequest::new("xxxxx", "xxxxx", 1, "tester");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            json!({"customer_uid": "xxxxx", "merchant_uid": "xxxxx", "amount": 1, "name": "tester"})
        );
    }

    #[test]
    fn test_schedule_request_serialize() {
        let mut first = Schedule::new("order_1", 1_700_000_000, 9900);
        first.name = Some("monthly".to_string());
        let req = ScheduleRequest::new("customer_8", vec![first]);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["customer_uid"], "customer_8");
        assert_eq!(json["schedules"][0]["schedule_at"], 1_700_000_000);
        assert_eq!(json["schedules"][0]["name"], "monthly");
        assert!(json.get("card_number").is_none());
    }

    #[test]
    fn test_unschedule_all_omits_merchant_uids() {
        let json = serde_json::to_string(&UnscheduleRequest::all("customer_8")).unwrap();
        assert_eq!(json, r#"{"customer_uid":"customer_8"}"#);

        let req = UnscheduleRequest::only("customer_8", vec!["order_1".to_string()]);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["merchant_uid"], json!(["order_1"]));
    }
}
