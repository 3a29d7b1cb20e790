//! Core session logic for the Parlor chat client.
//!
//! # Module Structure
//!
//! - `session`: The chat session controller (`ChatSession`)
//! - `backend`: The assistant backend trait and its error taxonomy
//! - `config`: Session configuration (`SessionConfig`)
//! - `error`: Shared error type for local failures

pub mod backend;
pub mod config;
pub mod error;
pub mod session;

pub use backend::{AssistantBackend, BackendError};
pub use config::{ClearFailureNotice, SessionConfig};
pub use error::{ParlorError, Result};
pub use session::{ChatSession, ClearOutcome, SubmitOutcome};
