//! Error types for the Serenity workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for every Serenity crate.
///
/// The session and advice use cases are total and never produce one of
/// these; they come from the outer surfaces (completion client, preference
/// storage, configuration loading).
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum SerenityError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The completion service answered with an error or an unusable body
    #[error("Completion error{}: {message}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Completion {
        status: Option<u16>,
        message: String,
    },

    /// The completion service did not answer within the request timeout
    #[error("Timed out after {0} ms")]
    Timeout(u64),

    /// The owning conversation was cancelled before the operation finished
    #[error("Operation cancelled")]
    Cancelled,
}

impl SerenityError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Completion error
    pub fn completion(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Completion {
            status,
            message: message.into(),
        }
    }

    /// Check if this is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Check if this is a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<std::io::Error> for SerenityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SerenityError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SerenityError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for SerenityError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, SerenityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion_keeps_kind() {
        let err: SerenityError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing file").into();
        let message = err.to_string();
        assert!(message.contains("missing file"));
        assert!(message.contains("NotFound"));
    }

    #[test]
    fn test_completion_display_with_and_without_status() {
        let with_status = SerenityError::completion(Some(429), "rate limited");
        assert_eq!(
            with_status.to_string(),
            "Completion error (HTTP 429): rate limited"
        );

        let without_status = SerenityError::completion(None, "empty reply");
        assert_eq!(without_status.to_string(), "Completion error: empty reply");
    }

    #[test]
    fn test_type_checks() {
        assert!(SerenityError::Timeout(10).is_timeout());
        assert!(SerenityError::Cancelled.is_cancelled());
        assert!(!SerenityError::config("bad").is_timeout());
    }
}
