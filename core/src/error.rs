//! Error types for the OneSignal API client.
//!
//! # Design
//! Callers need to tell apart "my request was malformed" (`Serialization`,
//! `Configuration`), "the network failed" (`Transport`), and "the server
//! rejected my request" (`Api`, `InternalServerError`). `Decode` covers any
//! body that could not be read as JSON, whatever the status.
//!
//! Every error is terminal for the call that produced it; nothing here is
//! retried.

use thiserror::Error;

/// Errors returned by `Client` and the resource wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The client was built without a usable credential, base URL or app id,
    /// or a call asked for a credential kind that was never configured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// A response body could not be decoded, either into the expected type
    /// or, for error statuses, into the `{"errors": [...]}` envelope.
    #[error("couldn't decode response body JSON: {0}")]
    DecodeError(String),

    /// The transport failed to send the request or read the response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status and an error envelope.
    #[error("API errors:\n - {}", messages.join("\n - "))]
    Api { status: u16, messages: Vec<String> },

    /// The API answered with HTTP 500. The body at that status is not JSON,
    /// so it is never parsed.
    #[error("internal server error")]
    InternalServerError,
}

impl ApiError {
    /// Messages reported by the remote API, empty for locally raised errors.
    pub fn messages(&self) -> &[String] {
        match self {
            ApiError::Api { messages, .. } => messages,
            _ => &[],
        }
    }

    /// HTTP status carried by errors that came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::InternalServerError => Some(500),
            _ => None,
        }
    }

    pub fn is_api(&self) -> bool {
        matches!(self, ApiError::Api { .. } | ApiError::InternalServerError)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
