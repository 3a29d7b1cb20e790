//! Conversation message types.
//!
//! A message is created once by the session controller and never mutated
//! afterwards; the transcript only ever appends or resets wholesale.

use serde::{Deserialize, Serialize};

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message typed by the user.
    User,
    /// Reply from the remote assistant.
    Assistant,
    /// Locally synthesized notice (e.g. a failed exchange) shown inline.
    System,
}

/// A single message in the conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message. Assistant content may carry lightweight
    /// markup; the controller treats it as opaque text.
    pub content: String,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
}

impl ConversationMessage {
    /// Creates a message stamped with the current time.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_with_lowercase_wire_names() {
        let msg = ConversationMessage::new(MessageRole::Assistant, "Hi there!");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "Hi there!");
    }

    #[test]
    fn roles_round_trip() {
        for role in [MessageRole::User, MessageRole::Assistant, MessageRole::System] {
            let json = serde_json::to_string(&role).unwrap();
            let back: MessageRole = serde_json::from_str(&json).unwrap();
            assert_eq!(role, back);
        }
    }
}
