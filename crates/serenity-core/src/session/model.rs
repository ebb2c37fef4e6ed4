//! Session domain model.
//!
//! This module contains the core Session entity that represents one
//! conversation between a user and the assistant.

use super::message::ChatMessage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One conversational interaction, bounded by start and end timestamps.
///
/// A session contains:
/// - Identifiers for the session and the owning user
/// - Start timestamp, and an end timestamp once the session is closed
/// - The ordered message history (insertion order is conversation order)
/// - Mood scores captured before and after the conversation
///
/// Sessions are values. Every `with_*` method returns a new session and
/// leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub session_id: String,
    /// Identifier of the user who owns the session
    pub user_id: String,
    /// When the session was opened
    pub start_timestamp: DateTime<Utc>,
    /// When the session was closed, `None` while it is still open
    pub end_timestamp: Option<DateTime<Utc>>,
    /// Conversation history, oldest first
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Mood score reported before the session
    #[serde(default)]
    pub mood_score_pre: i32,
    /// Mood score reported after the session
    #[serde(default)]
    pub mood_score_post: i32,
}

impl Session {
    /// Opens a new session for `user_id` with a fresh identifier.
    pub fn open(user_id: impl Into<String>) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            start_timestamp: Utc::now(),
            end_timestamp: None,
            messages: Vec::new(),
            mood_score_pre: 0,
            mood_score_post: 0,
        }
    }

    /// Returns true until an end timestamp has been recorded.
    pub fn is_open(&self) -> bool {
        self.end_timestamp.is_none()
    }

    /// Returns a copy with `message` appended after the existing history.
    pub fn with_message(&self, message: ChatMessage) -> Self {
        let mut messages = Vec::with_capacity(self.messages.len() + 1);
        messages.extend(self.messages.iter().cloned());
        messages.push(message);

        Self {
            messages,
            ..self.clone()
        }
    }

    /// Returns a copy closed at `ended_at`.
    ///
    /// The end never precedes the start; an earlier instant is clamped to
    /// the start timestamp.
    pub fn with_end(&self, ended_at: DateTime<Utc>) -> Self {
        Self {
            end_timestamp: Some(ended_at.max(self.start_timestamp)),
            ..self.clone()
        }
    }

    /// Returns a copy with both mood scores replaced.
    pub fn with_mood_scores(&self, pre: i32, post: i32) -> Self {
        Self {
            mood_score_pre: pre,
            mood_score_post: post,
            ..self.clone()
        }
    }

    /// Milliseconds between start and end, or between start and `now` while
    /// the session is open. Never negative.
    pub fn duration_ms(&self, now: DateTime<Utc>) -> i64 {
        let end = self.end_timestamp.unwrap_or(now);
        (end - self.start_timestamp).num_milliseconds().max(0)
    }
}
