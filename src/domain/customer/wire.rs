//! Billing-customer request bodies and query parameters.

use serde::{Deserialize, Serialize};

/// Body of `POST subscribe/customers/{customer_uid}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRequest {
    pub card_number: String,
    /// `YYYY-MM`.
    pub expiry: String,
    pub birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwd_2digit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_tel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_postcode: Option<String>,
}

impl CustomerRequest {
    pub fn new(
        card_number: impl Into<String>,
        expiry: impl Into<String>,
        birth: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiry: expiry.into(),
            birth: birth.into(),
            ..Default::default()
        }
    }
}

/// Query for `GET subscribe/customers/{customer_uid}/payments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct PageQuery {
    pub page: u32,
}

/// Query for `GET subscribe/customers/{customer_uid}/schedules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleQuery {
    /// Range start (unix seconds).
    pub from: i64,
    /// Range end (unix seconds).
    pub to: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// `scheduled`, `executed`, `revoked`; all when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_status: Option<String>,
}

impl ScheduleQuery {
    pub fn new(from: i64, to: i64) -> Self {
        Self {
            from,
            to,
            page: None,
            schedule_status: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.schedule_status = Some(status.into());
        self
    }
}
