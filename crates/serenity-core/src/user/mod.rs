//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: User profile domain model and its nested preferences
//!
//! # Usage
//!
//! ```ignore
//! use serenity_core::user::{PrivacyLevel, UserPreferences, UserProfile};
//! ```

mod model;

// Re-export public API
pub use model::{PrivacyLevel, UserPreferences, UserProfile};
