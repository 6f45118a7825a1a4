//! Payment request bodies and search parameters.

use serde::{Deserialize, Serialize};

use super::PaymentStatus;

/// Parameters for `GET payments/status/{status}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentsQuery {
    pub status: PaymentStatus,
    pub page: u32,
    /// Lower bound on the payment time (unix seconds).
    pub from: Option<i64>,
    /// Upper bound on the payment time (unix seconds).
    pub to: Option<i64>,
}

impl Default for PaymentsQuery {
    fn default() -> Self {
        Self {
            status: PaymentStatus::All,
            page: 1,
            from: None,
            to: None,
        }
    }
}

impl PaymentsQuery {
    pub fn new(status: PaymentStatus) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_time_range(mut self, from: i64, to: i64) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Relative request path, query string included.
    ///
    /// `from` and `to` are only appended when set.
    pub fn to_path(&self) -> String {
        let mut path = format!("payments/status/{}?page={}", self.status, self.page);
        if let Some(from) = self.from {
            path.push_str(&format!("&from={}", from));
        }
        if let Some(to) = self.to {
            path.push_str(&format!("&to={}", to));
        }
        path
    }
}

/// Body of `POST payments/cancel`.
///
/// Identify the payment by `imp_uid` or `merchant_uid`. Leaving `amount`
/// unset cancels the full remaining amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imp_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_free: Option<u64>,
    /// Cancellable amount the caller expects the gateway to hold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_holder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_account: Option<String>,
}

impl CancelRequest {
    pub fn by_imp_uid(imp_uid: impl Into<String>) -> Self {
        Self {
            imp_uid: Some(imp_uid.into()),
            ..Default::default()
        }
    }

    pub fn by_merchant_uid(merchant_uid: impl Into<String>) -> Self {
        Self {
            merchant_uid: Some(merchant_uid.into()),
            ..Default::default()
        }
    }

    /// Partial cancellation.
    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_checksum(mut self, checksum: u64) -> Self {
        self.checksum = Some(checksum);
        self
    }

    /// Refund destination for virtual-account payments.
    pub fn with_refund_account(
        mut self,
        holder: impl Into<String>,
        bank: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        self.refund_holder = Some(holder.into());
        self.refund_bank = Some(bank.into());
        self.refund_account = Some(account.into());
        self
    }
}

/// Body of `POST payments/prepare`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareRequest {
    pub merchant_uid: String,
    pub amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_path() {
        assert_eq!(PaymentsQuery::default().to_path(), "payments/status/all?page=1");
    }

    #[test]
    fn test_query_path_with_range() {
        let query = PaymentsQuery::new(PaymentStatus::Paid)
            .with_page(3)
            .with_time_range(1_446_691_529, 1_446_791_529);
        assert_eq!(
            query.to_path(),
            "payments/status/paid?page=3&from=1446691529&to=1446791529"
        );
    }

    #[test]
    fn test_query_path_with_only_to() {
        let query = PaymentsQuery {
            to: Some(2000),
            ..Default::default()
        };
        assert_eq!(query.to_path(), "payments/status/all?page=1&to=2000");
    }

    #[test]
    fn test_cancel_request_omits_unset_fields() {
        let req = CancelRequest::by_merchant_uid("M00001");
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"merchant_uid":"M00001"}"#);
    }

    #[test]
    fn test_partial_cancel_request() {
        let req = CancelRequest::by_imp_uid("imp_1")
            .with_amount(500)
            .with_reason("partial refund");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["imp_uid"], "imp_1");
        assert_eq!(json["amount"], 500);
        assert_eq!(json["reason"], "partial refund");
        assert!(json.get("merchant_uid").is_none());
    }

    #[test]
    fn test_refund_account_fields() {
        let req = CancelRequest::by_imp_uid("imp_1").with_refund_account("홍길동", "088", "1234");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["refund_holder"], "홍길동");
        assert_eq!(json["refund_bank"], "088");
        assert_eq!(json["refund_account"], "1234");
    }
}
