//! Domain layer for Serenity.
//!
//! Plain value records (sessions, messages, user profiles), the shared error
//! type, the mood scale, and the traits the outer crates implement.

pub mod completion;
pub mod config;
pub mod error;
pub mod mood;
pub mod preferences;
pub mod session;
pub mod user;

// Re-export common error type
pub use error::{Result, SerenityError};
