//! Application layer for Serenity.
//!
//! Use cases coordinating the domain model in `serenity-core`: the chat
//! session lifecycle and the religious advice lookup.

pub mod chat_session_usecase;
pub mod religious_advice;
pub mod response_rules;

pub use chat_session_usecase::ChatSessionUseCase;
pub use religious_advice::{Religion, ReligiousAdviceUseCase};
pub use response_rules::ResponseCategory;
