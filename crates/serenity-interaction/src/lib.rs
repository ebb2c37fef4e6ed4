//! Remote completion clients for Serenity.
//!
//! Implementations of [`serenity_core::completion::CompletionClient`] that
//! talk to hosted language models.

pub mod openai_completion_client;

pub use openai_completion_client::OpenAICompletionClient;
