//! Errors reported by the reddit collaborators

use thiserror::Error;

/// Failure of a call into the reddit service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed resource does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// The account may not access the resource
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The submission is archived and can no longer be replied to
    #[error("submission is too old to reply to")]
    TooOld,

    /// The service answered with a 5xx status
    #[error("service unavailable (HTTP {status})")]
    Unavailable {
        /// HTTP status code
        status: u16,
    },

    /// The request timed out
    #[error("request timed out")]
    Timeout,

    /// The API rejected the request
    #[error("API error {code}: {message}")]
    Api {
        /// Reddit error code, e.g. `SUBREDDIT_NOEXIST`
        code: String,
        /// Human-readable explanation
        message: String,
    },

    /// Authentication failed or the token was rejected
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Connection-level failure
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be understood
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Whether the failure is expected to clear up on its own
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::Timeout)
    }

    /// Map an HTTP status of a failed call
    #[must_use]
    pub fn from_status(status: u16, resource: &str) -> Self {
        match status {
            401 => Self::Auth(format!("token rejected for {resource}")),
            403 => Self::Forbidden(resource.to_string()),
            404 => Self::NotFound(resource.to_string()),
            500 | 502 | 503 | 504 | 522 => Self::Unavailable { status },
            _ => Self::Api {
                code: format!("HTTP_{status}"),
                message: resource.to_string(),
            },
        }
    }
}
