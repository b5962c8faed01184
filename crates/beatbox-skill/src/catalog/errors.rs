//! Errors raised while fetching the playlist catalog.
//!
//! `ureq` errors are unpacked into smaller variants and the transport error is
//! wrapped in `Arc` to keep the enum cheap to move and clone.

use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Failures of a catalog fetch.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The backend could not be reached (DNS, connect, TLS, read).
    #[error("catalog transport error: {message}")]
    Transport {
        /// Human-readable description of the failure.
        message: String,
        /// Underlying transport error.
        #[source]
        source: Arc<ureq::Transport>,
    },

    /// The backend answered with a non-success status code.
    #[error("catalog request failed with HTTP status {status}")]
    Status {
        /// HTTP status code returned by the backend.
        status: u16,
    },

    /// The response body is not a JSON array of playlist records.
    #[error("failed to decode catalog response: {source}")]
    Decode {
        /// Underlying read or JSON error.
        #[source]
        source: Arc<io::Error>,
    },
}

impl CatalogError {
    /// Converts a `ureq` error into a catalog error.
    #[must_use]
    pub fn from_ureq(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(status, _) => Self::Status { status },
            ureq::Error::Transport(transport) => Self::Transport {
                message: transport.to_string(),
                source: Arc::new(transport),
            },
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(source: io::Error) -> Self {
        Self::Decode {
            source: Arc::new(source),
        }
    }
}
