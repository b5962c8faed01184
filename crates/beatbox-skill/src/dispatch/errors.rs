//! Error types for request dispatch failures.
//!
//! Every variant ends in the fallback handler: the caller always receives a
//! well-formed response, and the error itself only reaches the logs.

use std::io;

use thiserror::Error;

/// Errors surfaced while parsing or routing a request envelope.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The request line is not a JSON request envelope.
    #[error("malformed request envelope: {message}")]
    MalformedEnvelope {
        /// Description of the parse failure.
        message: String,
        /// Underlying JSON error, when one exists.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The request line exceeds the maximum allowed size.
    #[error("request too large: {size} bytes exceeds {max_size} byte limit")]
    RequestTooLarge {
        /// Size of the offending line in bytes.
        size: usize,
        /// Configured limit in bytes.
        max_size: usize,
    },

    /// A slot required by the intent is absent or has no value.
    #[error("intent '{intent}' is missing a value for slot '{slot}'")]
    MissingSlot {
        /// Intent being handled.
        intent: String,
        /// Name of the missing slot.
        slot: String,
    },

    /// No handler accepts the request type and intent.
    #[error(
        "no handler for request type '{request_type}' with intent '{}'",
        .intent.as_deref().unwrap_or("<none>")
    )]
    Unhandled {
        /// Request type from the envelope.
        request_type: String,
        /// Intent name, if the request carried one.
        intent: Option<String>,
    },

    /// IO error while reading requests or writing responses.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Response serialization failed.
    #[error("failed to serialize response: {0}")]
    SerializeResponse(#[from] serde_json::Error),
}

impl DispatchError {
    /// Creates a malformed envelope error from a serde error.
    #[must_use]
    pub fn from_json_error(source: serde_json::Error) -> Self {
        Self::MalformedEnvelope {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Creates a malformed envelope error with a custom message.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedEnvelope {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a request too large error.
    #[must_use]
    pub const fn request_too_large(size: usize, max_size: usize) -> Self {
        Self::RequestTooLarge { size, max_size }
    }

    /// Creates a missing slot error.
    #[must_use]
    pub fn missing_slot(intent: impl Into<String>, slot: impl Into<String>) -> Self {
        Self::MissingSlot {
            intent: intent.into(),
            slot: slot.into(),
        }
    }

    /// Creates an unhandled request error.
    #[must_use]
    pub fn unhandled(request_type: impl Into<String>, intent: Option<&str>) -> Self {
        Self::Unhandled {
            request_type: request_type.into(),
            intent: intent.map(str::to_owned),
        }
    }
}
