//! Shared types for the Parlor chat client.
//!
//! These are the plain data types exchanged between the session controller,
//! the backend client, and the presentation surface.

pub mod message;

pub use message::{ConversationMessage, MessageRole};

use serde::{Deserialize, Serialize};

/// A transient error notice shown above the transcript.
///
/// Banners are not part of the conversation history; they carry a single
/// human-readable line and a visibility flag the surface can toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    /// The text displayed to the user.
    pub text: String,
    /// Whether the banner is currently shown.
    pub visible: bool,
}

impl Banner {
    /// Creates a visible banner with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
        }
    }

    /// Hides the banner. Dismissing an already-hidden banner is a no-op.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_is_idempotent() {
        let mut banner = Banner::new("backend unreachable");
        assert!(banner.visible);

        banner.dismiss();
        assert!(!banner.visible);

        banner.dismiss();
        assert!(!banner.visible);
    }
}
