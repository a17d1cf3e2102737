//! Gateway client errors and their mapping into the unified error type.

use thiserror::Error;

use intranet_core::error::AppError;

/// Failures while forwarding a request to the backend gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The gateway answered with a non-success status. Carries the
    /// upstream status and the `message`/`error` field of the upstream
    /// body when one was present.
    #[error("gateway returned {status}: {message}")]
    Status {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream error message.
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("gateway request timed out")]
    Timeout,

    /// The gateway could not be reached at all.
    #[error("failed to reach gateway: {0}")]
    Unreachable(String),

    /// The gateway answered with a body that could not be read as JSON.
    #[error("unreadable gateway response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Unreachable(err.to_string())
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Status { status, message } => match status {
                400 => Self::validation(message),
                401 => Self::unauthenticated(message),
                403 => Self::forbidden(message),
                404 => Self::not_found(message),
                _ => Self::gateway(message),
            },
            GatewayError::Timeout => {
                Self::timeout("The backend gateway did not respond in time")
            }
            GatewayError::Unreachable(message) | GatewayError::Decode(message) => {
                Self::gateway(message)
            }
        }
    }
}
