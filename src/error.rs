//! Error types for record fetch operations.

use thiserror::Error;

use crate::context::ContextError;

/// Errors that can occur while fetching a record.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Configuration is missing or incomplete.
    #[error("configuration required: {0}")]
    ConfigMissing(String),

    /// Configuration is present but unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The request could not be built; no network I/O was attempted.
    #[error("invalid request url: {0}")]
    InvalidRequest(#[from] url::ParseError),

    /// HTTP transport error.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The call was cancelled or its deadline passed while waiting.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// The server answered with a status other than 200 OK.
    #[error("response not ok. {status_text}")]
    ResponseNotOk { status: u16, status_text: String },

    /// The response body is not a valid record.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Build a [`FetchError::ResponseNotOk`] from a received status code.
    pub fn response_not_ok(status: reqwest::StatusCode) -> Self {
        Self::ResponseNotOk {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// True when the server answered, but not with 200 OK.
    pub fn is_response_not_ok(&self) -> bool {
        matches!(self, Self::ResponseNotOk { .. })
    }

    /// True for failures that happened before a response arrived, including
    /// cancellation and deadline expiry.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Context(_))
    }

    /// True when a 200 response carried an undecodable body.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// True when the call's deadline elapsed.
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, Self::Context(ContextError::DeadlineExceeded))
    }

    /// The HTTP status of a non-OK response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ResponseNotOk { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for fetch operations.
pub type Result<T> = core::result::Result<T, FetchError>;
