use std::error::Error as StdError;

use crate::domain::ValidationError;

/// Message used when an error response carries no usable `message` field.
pub const DEFAULT_ERROR_MESSAGE: &str = "Unknown API Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Coarse classification of [`SapakError`].
pub enum ErrorKind {
    /// Rejected locally before any network call.
    InputValidation,
    /// HTTP 401 / 403.
    Authentication,
    /// HTTP 400 / 422: the server rejected otherwise well-formed input.
    Validation,
    /// Any other HTTP failure, transport failure or unreadable response.
    Api,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`crate::SapakClient`] and its resources.
///
/// Nothing is retried or swallowed: every failure surfaces with its status code,
/// the server's message when there is one, and the underlying error as `source`.
pub enum SapakError {
    /// One of the domain constructors rejected an invalid value.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The API key was rejected (HTTP 401 / 403).
    #[error("authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    /// The API rejected the request payload (HTTP 400 / 422).
    #[error("request rejected by API ({status}): {message}")]
    Validation { status: u16, message: String },

    /// Any other non-successful HTTP status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// A successful response whose body could not be mapped.
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] Box<dyn StdError + Send + Sync>),
}

impl SapakError {
    /// Map a non-successful HTTP status to its error variant.
    pub(crate) fn from_status(status: u16, message: Option<String>, path: &str) -> Self {
        match status {
            400 | 422 => Self::Validation {
                status,
                message: message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_owned()),
            },
            401 | 403 => Self::Authentication {
                status,
                message: message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_owned()),
            },
            404 => Self::Api {
                status,
                message: message.unwrap_or_else(|| format!("endpoint not found: {path}")),
            },
            _ => Self::Api {
                status,
                message: message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_owned()),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InputValidation,
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Api { .. } | Self::Transport(_) | Self::MalformedResponse(_) => ErrorKind::Api,
        }
    }

    /// HTTP status code, when the error came from an HTTP response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. }
            | Self::Validation { status, .. }
            | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message reported by the API, when the error came from an HTTP response.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Authentication { message, .. }
            | Self::Validation { message, .. }
            | Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}
