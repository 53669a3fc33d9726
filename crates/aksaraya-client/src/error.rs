//! Error types for the client core.
//!
//! # Design
//!
//! - Constant error messages; context lives in structured fields.
//! - Keep the server-provided message (when any) so forms can show it verbatim.
//! - Transport details are captured as strings so the error stays transport-agnostic.

use thiserror::Error;

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors produced by the client core and its transports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    #[error("catalog api transport failure")]
    Transport {
        /// Operation that issued the request.
        operation: &'static str,
        /// Transport-level description.
        detail: String,
    },
    /// The backend answered with a non-success status.
    #[error("catalog api returned an error status")]
    Status {
        /// Operation that issued the request.
        operation: &'static str,
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body, when present.
        message: Option<String>,
    },
    /// A success response carried a body we could not decode.
    #[error("catalog api response could not be decoded")]
    Decode {
        /// Operation that issued the request.
        operation: &'static str,
        /// Decoder description.
        detail: String,
    },
    /// Reading or writing persisted session state failed.
    #[error("session storage failure")]
    Storage {
        /// Storage operation that failed.
        operation: &'static str,
        /// Backend description.
        detail: String,
    },
    /// An authenticated call was attempted without a session token.
    #[error("no active session")]
    Unauthenticated,
    /// Client-side input validation failed.
    #[error("invalid input")]
    Validation {
        /// Field that failed validation.
        field: &'static str,
        /// User-facing reason.
        reason: &'static str,
    },
    /// Configuration values were rejected.
    #[error("invalid client configuration")]
    Config {
        /// Offending setting.
        field: &'static str,
        /// Static reason for the failure.
        reason: &'static str,
    },
}

impl ClientError {
    /// Message supplied by the backend, if the failure carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// HTTP status for status failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected the session token.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::Status { status: 401, .. })
    }

    /// Text to surface to a user: server message, validation reason, or `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        match self {
            Self::Validation { reason, .. } => (*reason).to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Build a status error from a raw response body.
    #[must_use]
    pub fn from_status_body(operation: &'static str, status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<aksaraya_api_models::ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message);
        Self::Status {
            operation,
            status,
            message,
        }
    }
}
