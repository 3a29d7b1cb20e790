//! The assistant backend boundary.
//!
//! The session controller only ever talks to the remote service through this
//! trait; the HTTP implementation lives in `parlor-client`, and tests supply
//! scripted mocks.

use async_trait::async_trait;
use thiserror::Error;

/// Failure of a backend operation, classified by transport outcome.
///
/// Classification happens at the client layer from the nature of the failure
/// (connection refused vs. HTTP status vs. decode error), never by matching
/// on error message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The request never reached the service (no network, DNS failure,
    /// connection refused).
    #[error("could not connect to backend: {message}")]
    Connectivity { message: String },

    /// The service replied with a non-success status. `body` holds the raw
    /// response text, which may be empty.
    #[error("backend returned status {status}: {body}")]
    Service { status: u16, body: String },

    /// Any other failure during the request lifecycle, such as a malformed
    /// response body.
    #[error("unexpected backend failure: {message}")]
    Unexpected { message: String },
}

impl BackendError {
    /// Creates a Connectivity error.
    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::Connectivity {
            message: message.into(),
        }
    }

    /// Creates a Service error.
    pub fn service(status: u16, body: impl Into<String>) -> Self {
        Self::Service {
            status,
            body: body.into(),
        }
    }

    /// Creates an Unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Check if this is a Connectivity error.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity { .. })
    }

    /// The line shown to the user for this failure.
    ///
    /// Connectivity failures get a fixed string pointing at the backend
    /// process; service failures surface the response body, falling back to
    /// a generic string when the body is empty.
    pub fn user_message(&self) -> String {
        match self {
            Self::Connectivity { .. } => {
                "Could not connect to the server. Please make sure the backend is running."
                    .to_string()
            }
            Self::Service { body, .. } => {
                if body.trim().is_empty() {
                    "Server error".to_string()
                } else {
                    body.clone()
                }
            }
            Self::Unexpected { .. } => {
                "Network error. Please check your connection and try again.".to_string()
            }
        }
    }
}

/// Client-side view of the remote assistant service.
///
/// One call in, one result out; no streaming. Implementations must not
/// retry on failure, the controller decides what a failure means.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Probes the service. Used only to populate the startup banner.
    async fn health_check(&self) -> Result<(), BackendError>;

    /// Sends one user message scoped to `session_id` and returns the
    /// assistant's reply text.
    async fn send_message(&self, text: &str, session_id: &str) -> Result<String, BackendError>;

    /// Discards the server-side conversation state for `session_id`.
    async fn clear_session(&self, session_id: &str) -> Result<(), BackendError>;
}
