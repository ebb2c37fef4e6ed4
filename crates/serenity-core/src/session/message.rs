//! Conversation message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single turn in a session.
///
/// Authored either by the user (`is_user == true`) or by the assistant.
/// Messages are never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier (UUID format)
    pub message_id: String,
    /// The content of the message
    pub text: String,
    /// Whether the user wrote this message
    pub is_user: bool,
    /// When the message was created
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Creates a user-authored message stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    /// Creates an assistant-authored message stamped with the current time.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    fn new(text: impl Into<String>, is_user: bool) -> Self {
        Self {
            message_id: Uuid::new_v4().to_string(),
            text: text.into(),
            is_user,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_flags() {
        assert!(ChatMessage::user("hello").is_user);
        assert!(!ChatMessage::assistant("hi there").is_user);
    }

    #[test]
    fn test_each_message_gets_its_own_id() {
        let first = ChatMessage::user("same text");
        let second = ChatMessage::user("same text");
        assert_ne!(first.message_id, second.message_id);
        assert_eq!(first.text, second.text);
    }
}
