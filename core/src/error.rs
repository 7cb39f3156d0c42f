//! Error types for request construction.
//!
//! # Design
//! Callers usually need to know *which* argument was rejected, not the exact
//! wording of the message, so `InvalidArgument` carries the offending
//! parameter identifier as a separate field. Tests and callers match on
//! `param()` instead of on `Display` output.

use thiserror::Error;

/// Errors returned while adding parameters to a `RestRequest` or `RestClient`.
#[derive(Debug, Error)]
pub enum RequestError {
    /// An argument failed validation, e.g. a malformed `Host` header value.
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument { param: &'static str, reason: String },

    /// A value could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl RequestError {
    pub(crate) fn invalid_argument(param: &'static str, reason: impl Into<String>) -> Self {
        RequestError::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    /// Identifier of the rejected argument, if this is an `InvalidArgument`.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            RequestError::InvalidArgument { param, .. } => Some(*param),
            RequestError::SerializationError(_) => None,
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        RequestError::SerializationError(e.to_string())
    }
}
