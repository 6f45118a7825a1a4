//! The gateway response envelope.
//!
//! Every iamport endpoint wraps its payload as
//! `{"code": 0, "message": null, "response": {...}}`. `code == 0` is success;
//! anything else is a business outcome (declined card, already cancelled)
//! described by `message`, usually with a null `response`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SdkError;

/// Envelope code the gateway uses for success.
pub const SUCCESS_CODE: i64 = 0;

/// `{code, message, response}` wrapper applied to every gateway response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub response: Option<T>,
}

impl<T> Envelope<T> {
    /// Whether the gateway reported success.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// The gateway message, or an empty string.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// Borrow the payload.
    pub fn response(&self) -> Option<&T> {
        self.response.as_ref()
    }

    /// Turn a nonzero code into [`SdkError::Gateway`].
    ///
    /// A successful envelope with a null `response` yields `Ok(None)`.
    pub fn into_result(self) -> Result<Option<T>, SdkError> {
        if self.is_success() {
            Ok(self.response)
        } else {
            Err(SdkError::Gateway {
                code: self.code,
                message: self.message,
            })
        }
    }
}

impl Envelope<Value> {
    /// Decode the untyped payload into `T`, keeping code and message.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Envelope<T>, SdkError> {
        let response = match self.response {
            Some(Value::Null) | None => None,
            Some(value) => Some(serde_json::from_value(value)?),
        };
        Ok(Envelope {
            code: self.code,
            message: self.message,
            response,
        })
    }

    /// Look up a top-level field of the payload.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.response.as_ref().and_then(|r| r.get(name))
    }
}
