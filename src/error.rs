//! Unified SDK error types.
//!
//! Only conditions that stop the pipeline are errors. A gateway envelope with
//! a nonzero `code` (declined card, duplicate customer, already cancelled)
//! comes back as `Ok(Envelope)`; see [`Envelope::into_result`] for callers
//! that would rather branch on `Err`.
//!
//! [`Envelope::into_result`]: crate::envelope::Envelope::into_result

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The gateway answered with a nonzero envelope code.
    ///
    /// Never produced by the request pipeline itself, only by
    /// [`Envelope::into_result`](crate::envelope::Envelope::into_result).
    #[error("Gateway error {code}: {}", .message.as_deref().unwrap_or("no message"))]
    Gateway { code: i64, message: Option<String> },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SdkError {
    /// Whether this is an authentication failure.
    pub fn is_auth(&self) -> bool {
        matches!(self, SdkError::Auth(_))
    }

    /// HTTP status of the failed response, if the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Http(HttpError::Status { status, .. }) => Some(*status),
            SdkError::Auth(AuthError::Rejected { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        SdkError::Http(HttpError::Transport(e))
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// DNS, connect, TLS or timeout failure.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from a reachable endpoint.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

impl HttpError {
    /// Whether the transport gave up because the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Transport(e) if e.is_timeout())
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The token endpoint answered but carried no access token.
    #[error("No access token issued (code {code}): {}", .message.as_deref().unwrap_or("missing response"))]
    NoToken { code: i64, message: Option<String> },

    /// The token endpoint refused the credentials outright.
    #[error("Credentials rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// Result alias used across the SDK.
pub type SdkResult<T> = Result<T, SdkError>;
