//! OpenAICompletionClient - Chat Completions REST client.
//!
//! Configuration priority: ~/.config/serenity/secret.json > environment variables

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serenity_core::completion::{CompletionClient, CompletionRequest};
use serenity_core::config::{
    CompletionSettings, DEFAULT_COMPLETION_MODEL, DEFAULT_COMPLETION_TIMEOUT_SECS,
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
use serenity_core::{Result, SerenityError};
use serenity_infrastructure::SecretService;
use std::env;
use std::path::Path;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

const THERAPIST_PROMPT: &str = "You are a compassionate AI therapist. Your role is to:
- Listen actively and empathetically
- Provide supportive and non-judgmental responses
- Ask thoughtful questions to help users explore their feelings
- Offer gentle guidance and coping strategies
- Maintain professional boundaries
- Encourage professional help when appropriate";

/// Client that talks to an OpenAI-compatible Chat Completions endpoint.
#[derive(Clone)]
pub struct OpenAICompletionClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    request_timeout: Duration,
}

impl OpenAICompletionClient {
    /// Creates a new client with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            request_timeout: Duration::from_secs(DEFAULT_COMPLETION_TIMEOUT_SECS),
        }
    }

    /// Loads credentials from `secret.json` in `config_dir` (or the default
    /// config directory), falling back to `OPENAI_API_KEY` / `OPENAI_MODEL_NAME`.
    ///
    /// Model name defaults to `gpt-3.5-turbo` if not specified.
    pub fn try_from_config_dir(config_dir: Option<&Path>) -> Result<Self> {
        if let Ok(service) = SecretService::new(config_dir) {
            match service.load_secrets() {
                Ok(Some(secrets)) => {
                    if let Some(openai) = secrets.openai.filter(|c| !c.api_key.trim().is_empty()) {
                        let model = openai
                            .model_name
                            .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.into());
                        let mut client = Self::new(openai.api_key, model);
                        if let Some(base_url) = openai.base_url {
                            client = client.with_base_url(base_url);
                        }
                        return Ok(client);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("[OpenAICompletionClient] Ignoring unreadable secret file: {}", e)
                }
            }
        }

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            SerenityError::config(
                "OPENAI_API_KEY not found in ~/.config/serenity/secret.json or environment variables",
            )
        })?;
        let model =
            env::var("OPENAI_MODEL_NAME").unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.into());
        Ok(Self::new(api_key, model))
    }

    /// Applies model, token, temperature and timeout settings from `config.toml`.
    pub fn with_settings(mut self, settings: &CompletionSettings) -> Self {
        self.model = settings.model.clone();
        self.max_tokens = settings.max_tokens;
        self.temperature = settings.temperature;
        self.request_timeout = Duration::from_secs(settings.timeout_secs);
        self
    }

    /// Bounds a single HTTP round trip.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Points the client at an OpenAI-compatible gateway.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn build_request(&self, request: &CompletionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt(&request.context),
                },
                ChatMessage {
                    role: "user",
                    content: request.user_text.clone(),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    async fn send_request(&self, body: &ChatCompletionRequest) -> Result<String> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, COMPLETIONS_PATH))
            .bearer_auth(&self.api_key)
            .timeout(self.request_timeout)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    SerenityError::Timeout(self.request_timeout.as_millis() as u64)
                } else {
                    SerenityError::completion(None, format!("OpenAI API request failed: {err}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            SerenityError::completion(None, format!("Failed to parse OpenAI response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl CompletionClient for OpenAICompletionClient {
    fn name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = self.build_request(request);
        tracing::debug!(
            "[OpenAICompletionClient] Sending completion request: model={}, chars={}",
            body.model,
            request.user_text.len()
        );
        self.send_request(&body).await
    }
}

fn system_prompt(context: &str) -> String {
    if context.trim().is_empty() {
        THERAPIST_PROMPT.to_string()
    } else {
        format!("{THERAPIST_PROMPT}\n\nContext: {context}")
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| SerenityError::completion(None, "OpenAI API returned no content"))
}

fn map_http_error(status: StatusCode, body: &str) -> SerenityError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.to_string());

    SerenityError::completion(Some(status.as_u16()), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_request_carries_prompt_and_user_text() {
        let client = OpenAICompletionClient::new("sk-test", "gpt-3.5-turbo");
        let request =
            CompletionRequest::new("I feel overwhelmed").with_context("Mood before session: 3");

        let body = serde_json::to_value(client.build_request(&request)).unwrap();

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["messages"][0]["role"], "system");
        assert!(
            body["messages"][0]["content"]
                .as_str()
                .unwrap()
                .ends_with("Context: Mood before session: 3")
        );
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "I feel overwhelmed");
    }

    #[test]
    fn test_blank_context_is_omitted() {
        assert_eq!(system_prompt("   "), THERAPIST_PROMPT);
    }

    #[test]
    fn test_settings_override_defaults() {
        let settings = CompletionSettings {
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 5,
            max_tokens: 120,
            temperature: 0.2,
        };
        let client = OpenAICompletionClient::new("sk-test", "ignored")
            .with_settings(&settings)
            .with_base_url("http://localhost:8080/");

        assert_eq!(client.name(), "gpt-4o-mini");
        assert_eq!(client.max_tokens, 120);
        assert_eq!(client.request_timeout, Duration::from_secs(5));
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_credentials_from_secret_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("secret.json"),
            r#"{ "openai": { "api_key": "sk-file", "model_name": "gpt-4o-mini", "base_url": "http://gateway.local/" } }"#,
        )
        .unwrap();

        let client = OpenAICompletionClient::try_from_config_dir(Some(temp_dir.path())).unwrap();

        assert_eq!(client.api_key, "sk-file");
        assert_eq!(client.name(), "gpt-4o-mini");
        assert_eq!(client.base_url, "http://gateway.local");
    }

    #[tokio::test]
    async fn test_unanswered_request_times_out() {
        // Accepts connections at the socket level but never replies.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();

        let client = OpenAICompletionClient::new("sk-test", "gpt-3.5-turbo")
            .with_base_url(format!("http://{address}"))
            .with_request_timeout(Duration::from_millis(100));

        let err = client
            .complete(&CompletionRequest::new("hello"))
            .await
            .unwrap_err();

        assert!(err.is_timeout(), "unexpected error: {err:?}");
        drop(listener);
    }

    #[test]
    fn test_extract_first_choice() {
        let parsed: ChatCompletionResponse = serde_json::from_str(
            r#"{ "choices": [ { "message": { "content": "I'm here with you." } } ] }"#,
        )
        .unwrap();
        assert_eq!(extract_text_response(parsed).unwrap(), "I'm here with you.");
    }

    #[test]
    fn test_empty_choices_is_error() {
        let parsed: ChatCompletionResponse = serde_json::from_str(r#"{ "choices": [] }"#).unwrap();
        assert!(extract_text_response(parsed).is_err());

        let blank: ChatCompletionResponse =
            serde_json::from_str(r#"{ "choices": [ { "message": { "content": " " } } ] }"#)
                .unwrap();
        assert!(extract_text_response(blank).is_err());
    }

    #[test]
    fn test_http_error_uses_api_message() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{ "error": { "message": "Rate limit reached", "type": "requests" } }"#,
        );
        match err {
            SerenityError::Completion { status, message } => {
                assert_eq!(status, Some(429));
                assert_eq!(message, "Rate limit reached");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "Completion error (HTTP 502): upstream down");
    }
}
