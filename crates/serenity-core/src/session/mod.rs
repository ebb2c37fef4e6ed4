//! Session domain module.
//!
//! This module contains the session record and the messages exchanged
//! inside it.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`)
//! - `message`: Conversation turn type (`ChatMessage`)
//!
//! # Usage
//!
//! ```ignore
//! use serenity_core::session::{ChatMessage, Session};
//! ```

mod message;
mod model;

// Re-export public API
pub use message::ChatMessage;
pub use model::Session;
