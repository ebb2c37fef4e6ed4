//! Completion service seam.
//!
//! The chat use case only knows this trait; concrete HTTP clients live in
//! `serenity-interaction`.

use crate::error::Result;
use async_trait::async_trait;

/// A request for one assistant reply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletionRequest {
    /// What the user just said
    pub user_text: String,
    /// Free-form context (earlier turns, mood, profile notes)
    pub context: String,
}

impl CompletionRequest {
    pub fn new(user_text: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
            context: String::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

/// Text in, text out. Implementations may fail or hang; callers are
/// expected to bound them with a timeout.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Short human-readable name used in logs.
    fn name(&self) -> &str;

    /// Produces the assistant's reply to `request`.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
