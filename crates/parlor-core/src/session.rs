//! The chat session controller.
//!
//! `ChatSession` owns the transcript, the in-flight flag, and the banner,
//! and is the only component that mutates them. The presentation surface
//! reads this state and forwards user intents; the backend is reached only
//! through the [`AssistantBackend`](crate::backend::AssistantBackend) trait.

use crate::backend::{AssistantBackend, BackendError};
use crate::config::{ClearFailureNotice, SessionConfig};
use parlor_types::{Banner, ConversationMessage, MessageRole};
use std::sync::Arc;
use uuid::Uuid;

/// Fixed banner text for a failed startup health probe.
const HEALTH_BANNER_TEXT: &str =
    "Could not connect to the backend server. Please make sure it's running.";

/// A state transition applied to the session.
///
/// Submitting a message applies two events: `UserSubmitted` synchronously at
/// the call site, then `AssistantReplied` or `ExchangeFailed` once the round
/// trip resolves. Keeping the transitions in one place makes the sequence
/// testable without shared mutable closures.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionEvent {
    UserSubmitted(String),
    AssistantReplied(String),
    ExchangeFailed(String),
    HealthProbeFailed,
    TranscriptCleared,
}

/// What a `submit` call did, for surfaces that render incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Precondition failed (empty input or a send already in flight);
    /// no state changed.
    Rejected,
    /// The assistant replied; the transcript grew by two messages.
    Answered,
    /// The exchange failed; the transcript grew by the user message and a
    /// system notice, and the banner is visible.
    Failed,
}

/// What a `clear` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The backend confirmed; the transcript is now empty.
    Cleared,
    /// The backend refused or was unreachable; the transcript is untouched.
    Failed,
}

/// Controls one conversation with the assistant backend.
///
/// One instance per session. The session identifier is generated at
/// construction and never changes for the lifetime of the controller, so
/// independent instances (tabs, tests) never share server-side state.
pub struct ChatSession {
    session_id: String,
    transcript: Vec<ConversationMessage>,
    pending: bool,
    draft: String,
    banner: Option<Banner>,
    backend: Arc<dyn AssistantBackend>,
    config: SessionConfig,
}

impl ChatSession {
    /// Creates a session with a fresh random identifier.
    pub fn new(backend: Arc<dyn AssistantBackend>, config: SessionConfig) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            transcript: Vec::new(),
            pending: false,
            draft: String::new(),
            banner: None,
            backend,
            config,
        }
    }

    /// The stable per-session identifier.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// The ordered conversation transcript.
    pub fn transcript(&self) -> &[ConversationMessage] {
        &self.transcript
    }

    /// True while a send is outstanding. Surfaces should disable submission.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The current unsent input text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the unsent input text.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// The current error notice, if any.
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Probes the backend and raises a banner if it is unreachable.
    ///
    /// The transcript is untouched either way, and nothing is retried; the
    /// session stays usable and later operations surface their own failures.
    pub async fn initialize(&mut self) {
        match self.backend.health_check().await {
            Ok(()) => {
                tracing::debug!(session_id = %self.session_id, "backend health probe ok");
            }
            Err(err) => {
                tracing::warn!(session_id = %self.session_id, %err, "backend health probe failed");
                self.apply(SessionEvent::HealthProbeFailed);
            }
        }
    }

    /// Sends one user message and reconciles the transcript with the result.
    ///
    /// The user message is appended optimistically before the round trip;
    /// since at most one send is in flight, the reply (or failure notice)
    /// always lands directly after the message that provoked it.
    ///
    /// A no-op when `text` trims to empty or a send is already pending.
    /// The surface should disable submission while pending, but both
    /// conditions are re-checked here regardless.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.pending {
            return SubmitOutcome::Rejected;
        }

        let trimmed = trimmed.to_string();
        self.apply(SessionEvent::UserSubmitted(trimmed.clone()));

        let result = self.backend.send_message(&trimmed, &self.session_id).await;
        let outcome = match result {
            Ok(reply) => {
                self.apply(SessionEvent::AssistantReplied(reply));
                SubmitOutcome::Answered
            }
            Err(err) => {
                tracing::warn!(session_id = %self.session_id, %err, "send_message failed");
                self.apply(SessionEvent::ExchangeFailed(err.user_message()));
                SubmitOutcome::Failed
            }
        };
        self.pending = false;
        outcome
    }

    /// Asks the backend to drop this session's history, then empties the
    /// local transcript.
    ///
    /// The transcript is never speculatively cleared: on failure it is left
    /// exactly as it was. Whether the failure also raises a banner follows
    /// [`SessionConfig::clear_failure_notice`].
    pub async fn clear(&mut self) -> ClearOutcome {
        match self.backend.clear_session(&self.session_id).await {
            Ok(()) => {
                self.apply(SessionEvent::TranscriptCleared);
                ClearOutcome::Cleared
            }
            Err(err) => {
                tracing::warn!(session_id = %self.session_id, %err, "clear_session failed");
                if self.config.clear_failure_notice == ClearFailureNotice::Banner {
                    self.banner = Some(Banner::new(err.user_message()));
                }
                ClearOutcome::Failed
            }
        }
    }

    /// Hides the banner. Idempotent; a no-op when no banner exists.
    pub fn dismiss_banner(&mut self) {
        if let Some(banner) = self.banner.as_mut() {
            banner.dismiss();
        }
    }

    /// Applies one state transition.
    fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::UserSubmitted(text) => {
                self.transcript
                    .push(ConversationMessage::new(MessageRole::User, text));
                self.draft.clear();
                self.pending = true;
            }
            SessionEvent::AssistantReplied(text) => {
                self.transcript
                    .push(ConversationMessage::new(MessageRole::Assistant, text));
            }
            SessionEvent::ExchangeFailed(notice) => {
                self.transcript
                    .push(ConversationMessage::new(MessageRole::System, notice.clone()));
                self.banner = Some(Banner::new(notice));
            }
            SessionEvent::HealthProbeFailed => {
                self.banner = Some(Banner::new(HEALTH_BANNER_TEXT));
            }
            SessionEvent::TranscriptCleared => {
                self.transcript.clear();
            }
        }
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("session_id", &self.session_id)
            .field("transcript_len", &self.transcript.len())
            .field("pending", &self.pending)
            .field("banner", &self.banner)
            .finish()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
