//! Chat session use case implementation.
//!
//! `ChatSessionUseCase` drives a session through its lifecycle: opening it,
//! appending turns, producing assistant replies, recording mood scores and
//! closing it. Every operation returns a new `Session`; the argument is
//! never modified.

use crate::response_rules::ResponseCategory;
use chrono::Utc;
use serenity_core::completion::{CompletionClient, CompletionRequest};
use serenity_core::config::DEFAULT_COMPLETION_TIMEOUT_SECS;
use serenity_core::session::{ChatMessage, Session};
use serenity_core::{Result, SerenityError};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// How many earlier turns are forwarded to the completion service.
const CONTEXT_TURNS: usize = 6;

/// Use case for a single user's chat sessions.
pub struct ChatSessionUseCase {
    /// Remote reply generator, consulted only by [`Self::respond`]
    completion_client: Option<Arc<dyn CompletionClient>>,
    /// Upper bound on one remote reply
    response_timeout: Duration,
}

impl ChatSessionUseCase {
    /// Creates a use case that answers from the local keyword rules only.
    pub fn new() -> Self {
        Self {
            completion_client: None,
            response_timeout: Duration::from_secs(DEFAULT_COMPLETION_TIMEOUT_SECS),
        }
    }

    /// Lets `respond` ask `client` for replies before falling back to local rules.
    pub fn with_completion_client(mut self, client: Arc<dyn CompletionClient>) -> Self {
        self.completion_client = Some(client);
        self
    }

    /// Overrides how long `respond` waits for the completion service.
    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }

    /// Opens a new session for `user_id`.
    ///
    /// Each call yields a distinct session id, even for the same user.
    pub fn create_session(&self, user_id: &str) -> Session {
        let session = Session::open(user_id);
        tracing::debug!(
            "[ChatSessionUseCase] Created session {} for user {}",
            session.session_id,
            user_id
        );
        session
    }

    /// Returns a copy of `session` with a user turn appended.
    pub fn add_user_message(&self, session: &Session, text: &str) -> Session {
        session.with_message(ChatMessage::user(text))
    }

    /// Returns a copy of `session` with an assistant turn appended.
    pub fn add_ai_response(&self, session: &Session, text: &str) -> Session {
        session.with_message(ChatMessage::assistant(text))
    }

    /// Local keyword-based reply. Always returns a non-empty string.
    pub fn generate_ai_response(&self, text: &str) -> String {
        ResponseCategory::classify(text).template().to_string()
    }

    /// Returns a copy of `session` closed at the current time.
    pub fn end_session(&self, session: &Session) -> Session {
        let ended = session.with_end(Utc::now());
        tracing::debug!(
            "[ChatSessionUseCase] Ended session {} after {} messages",
            ended.session_id,
            ended.messages.len()
        );
        ended
    }

    /// Session length in milliseconds; open sessions are measured up to now.
    pub fn session_duration(&self, session: &Session) -> i64 {
        session.duration_ms(Utc::now())
    }

    /// Returns a copy with both mood scores replaced. Values are stored as given.
    pub fn update_mood_scores(&self, session: &Session, pre: i32, post: i32) -> Session {
        session.with_mood_scores(pre, post)
    }

    /// Post-session mood minus pre-session mood. Negative when mood dropped.
    ///
    /// Scores are stored unchecked, so the difference is widened to `i64`.
    pub fn calculate_mood_improvement(&self, session: &Session) -> i64 {
        i64::from(session.mood_score_post) - i64::from(session.mood_score_pre)
    }

    /// True when both the session id and the user id are non-empty.
    pub fn validate_session(&self, session: &Session) -> bool {
        !session.session_id.is_empty() && !session.user_id.is_empty()
    }

    /// Records the user's turn and the assistant's reply.
    ///
    /// The reply comes from the completion service, bounded by the response
    /// timeout. Any failure, timeout or blank reply falls back to
    /// [`Self::generate_ai_response`]. Crisis input skips the remote call
    /// and gets the crisis template immediately.
    ///
    /// # Errors
    ///
    /// Returns `SerenityError::Cancelled` if `cancel` fires before a reply
    /// is available. No assistant turn is recorded in that case.
    pub async fn respond(
        &self,
        session: &Session,
        text: &str,
        cancel: &CancellationToken,
    ) -> Result<Session> {
        if cancel.is_cancelled() {
            return Err(SerenityError::Cancelled);
        }

        let with_user = self.add_user_message(session, text);
        let category = ResponseCategory::classify(text);

        if category == ResponseCategory::Crisis {
            tracing::warn!(
                "[ChatSessionUseCase] Crisis language in session {}, replying locally",
                session.session_id
            );
            return Ok(self.add_ai_response(&with_user, category.template()));
        }

        let Some(client) = self.completion_client.as_ref() else {
            return Ok(self.add_ai_response(&with_user, category.template()));
        };

        let request = CompletionRequest::new(text).with_context(conversation_context(session));
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(
                    "[ChatSessionUseCase] Reply cancelled for session {}",
                    session.session_id
                );
                return Err(SerenityError::Cancelled);
            }
            outcome = tokio::time::timeout(
                self.response_timeout,
                client.complete(&request),
            ) => outcome,
        };

        let reply = match outcome {
            Ok(Ok(reply)) if !reply.trim().is_empty() => reply,
            Ok(Ok(_)) => {
                tracing::warn!(
                    "[ChatSessionUseCase] {} returned an empty reply, using local response",
                    client.name()
                );
                category.template().to_string()
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    "[ChatSessionUseCase] {} failed: {}, using local response",
                    client.name(),
                    e
                );
                category.template().to_string()
            }
            Err(_) => {
                tracing::warn!(
                    "[ChatSessionUseCase] {} timed out after {} ms, using local response",
                    client.name(),
                    self.response_timeout.as_millis()
                );
                category.template().to_string()
            }
        };

        Ok(self.add_ai_response(&with_user, &reply))
    }
}

impl Default for ChatSessionUseCase {
    fn default() -> Self {
        Self::new()
    }
}

/// Recent turns plus the opening mood, formatted for the completion prompt.
fn conversation_context(session: &Session) -> String {
    let mut lines = Vec::new();
    if session.mood_score_pre != 0 {
        lines.push(format!("Mood before session: {}/10", session.mood_score_pre));
    }

    let skip = session.messages.len().saturating_sub(CONTEXT_TURNS);
    for message in session.messages.iter().skip(skip) {
        let speaker = if message.is_user { "User" } else { "Assistant" };
        lines.push(format!("{}: {}", speaker, message.text));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replies with a fixed string and counts calls.
    struct FixedClient {
        reply: String,
        calls: AtomicUsize,
    }

    impl FixedClient {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for FixedClient {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn complete(&self, _request: &CompletionRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl CompletionClient for FailingClient {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(&self, _request: &CompletionRequest) -> Result<String> {
            Err(SerenityError::completion(Some(503), "service unavailable"))
        }
    }

    struct SlowClient;

    #[async_trait]
    impl CompletionClient for SlowClient {
        fn name(&self) -> &str {
            "slow"
        }

        async fn complete(&self, _request: &CompletionRequest) -> Result<String> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok("too late".to_string())
        }
    }

    fn usecase_with(client: Arc<dyn CompletionClient>) -> ChatSessionUseCase {
        ChatSessionUseCase::new()
            .with_completion_client(client)
            .with_response_timeout(Duration::from_millis(50))
    }

    #[test]
    fn test_context_includes_mood_and_recent_turns() {
        let usecase = usecase_with(Arc::new(FailingClient));
        let mut session = usecase.update_mood_scores(&usecase.create_session("user123"), 4, 0);
        for i in 0..8 {
            session = usecase.add_user_message(&session, &format!("turn {i}"));
        }

        let context = conversation_context(&session);
        assert!(context.starts_with("Mood before session: 4/10"));
        assert!(!context.contains("turn 1\n"));
        assert!(context.contains("User: turn 2"));
        assert!(context.ends_with("User: turn 7"));
    }

    #[tokio::test]
    async fn test_respond_uses_remote_reply() {
        let client = Arc::new(FixedClient::new("Tell me more about your week."));
        let usecase = usecase_with(client.clone());
        let session = usecase.create_session("user123");

        let updated = usecase
            .respond(&session, "Work has been hectic", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(updated.messages.len(), 2);
        assert!(updated.messages[0].is_user);
        assert_eq!(updated.messages[1].text, "Tell me more about your week.");
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        assert!(session.messages.is_empty());
    }

    #[tokio::test]
    async fn test_respond_falls_back_on_error() {
        let usecase = usecase_with(Arc::new(FailingClient));
        let session = usecase.create_session("user123");

        let updated = usecase
            .respond(&session, "I'm so nervous", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            updated.messages[1].text,
            ResponseCategory::Anxiety.template()
        );
    }

    #[tokio::test]
    async fn test_respond_falls_back_on_blank_reply() {
        let usecase = usecase_with(Arc::new(FixedClient::new("   ")));
        let session = usecase.create_session("user123");

        let updated = usecase
            .respond(&session, "hello", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(updated.messages[1].text, ResponseCategory::General.template());
    }

    #[tokio::test]
    async fn test_respond_falls_back_on_timeout() {
        let usecase = usecase_with(Arc::new(SlowClient));
        let session = usecase.create_session("user123");

        let updated = usecase
            .respond(&session, "I feel great", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            updated.messages[1].text,
            ResponseCategory::Positive.template()
        );
    }

    #[tokio::test]
    async fn test_respond_without_client_is_local() {
        let usecase = ChatSessionUseCase::new();
        let session = usecase.create_session("user123");

        let updated = usecase
            .respond(&session, "Feeling down today", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(updated.messages[1].text, ResponseCategory::Sadness.template());
    }

    #[tokio::test]
    async fn test_crisis_skips_remote_client() {
        let client = Arc::new(FixedClient::new("remote"));
        let usecase = usecase_with(client.clone());
        let session = usecase.create_session("user123");

        let updated = usecase
            .respond(&session, "This is an emergency", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(updated.messages[1].text, ResponseCategory::Crisis.template());
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_respond_when_already_cancelled() {
        let client = Arc::new(FixedClient::new("remote"));
        let usecase = usecase_with(client.clone());
        let session = usecase.create_session("user123");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = usecase.respond(&session, "hello", &cancel).await.unwrap_err();

        assert!(err.is_cancelled());
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cancel_while_waiting_for_reply() {
        let usecase = ChatSessionUseCase::new()
            .with_completion_client(Arc::new(SlowClient))
            .with_response_timeout(Duration::from_secs(60));
        let session = usecase.create_session("user123");
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let err = usecase.respond(&session, "hello", &cancel).await.unwrap_err();
        assert!(err.is_cancelled());
    }
}
