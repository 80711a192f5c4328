//! Error types for the pkmnapi client.
//!
//! # Design
//! Every failure reaches the caller through one `ApiError` value. A rejected
//! request keeps the server's decoded body verbatim, since its structured
//! `{"data": {"id", "type": "errors", "attributes": {"message"}}}` document is
//! the most useful thing to show. Failures that never produced a server
//! answer, or produced an undecodable one, are separate variants carrying a
//! message.

use serde_json::Value;

use crate::config::ConfigError;

/// Errors returned by client builders, parsers, transports and the facade.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `body` is the decoded JSON
    /// body, or the raw text as a JSON string when it was not JSON.
    #[error("HTTP {status}: {body}")]
    Server { status: u16, body: Value },

    /// No response was obtained: connection refused, DNS, timeout, TLS.
    #[error("transport failed: {0}")]
    Transport(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("decoding failed: {0}")]
    Decode(String),

    /// The request payload or a path id could not be encoded.
    #[error("encoding failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// HTTP status of a server rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The rejection payload: the server body when there was one, the
    /// error's textual form otherwise.
    pub fn payload(&self) -> Value {
        match self {
            ApiError::Server { body, .. } => body.clone(),
            other => Value::String(other.to_string()),
        }
    }

    /// `data.attributes.message` of a structured server error body.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { body, .. } => body
                .pointer("/data/attributes/message")
                .and_then(Value::as_str),
            _ => None,
        }
    }
}
