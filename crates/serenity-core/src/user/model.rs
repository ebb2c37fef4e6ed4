//! UserProfile domain model.
//!
//! Represents the user's identity, demographic details and app preferences.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// How much of the user's data may be shared or surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivacyLevel {
    Low,
    #[default]
    Medium,
    High,
}

/// App-level preferences nested inside a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub theme: String,
    pub notifications: bool,
    /// Daily reminder time as `HH:MM`
    pub reminder_time: String,
    pub language: String,
    pub privacy_level: PrivacyLevel,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            notifications: true,
            reminder_time: "09:00".to_string(),
            language: "en".to_string(),
            privacy_level: PrivacyLevel::default(),
        }
    }
}

/// User profile domain model.
///
/// `religion` is a free-form tag ("Christian", "Muslim", "Atheist", ...)
/// read by the religious advice lookup. `None` means the user has not
/// shared one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub preferences: UserPreferences,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Creates a profile with default preferences and both timestamps set to now.
    pub fn new(
        user_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth: None,
            gender: String::new(),
            preferences: UserPreferences::default(),
            profile_picture_url: None,
            bio: None,
            religion: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the religion tag.
    pub fn with_religion(mut self, religion: impl Into<String>) -> Self {
        self.religion = Some(religion.into());
        self
    }

    /// "First Last", skipping whichever part is blank.
    pub fn display_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.theme, "light");
        assert!(prefs.notifications);
        assert_eq!(prefs.reminder_time, "09:00");
        assert_eq!(prefs.privacy_level, PrivacyLevel::Medium);
    }

    #[test]
    fn test_display_name_skips_blank_parts() {
        let profile = UserProfile::new("user123", "John", "Doe");
        assert_eq!(profile.display_name(), "John Doe");

        let first_only = UserProfile::new("user123", "John", "  ");
        assert_eq!(first_only.display_name(), "John");
    }

    #[test]
    fn test_profile_toml_uses_defaults_for_missing_fields() {
        let toml_str = r#"
user_id = "user123"
first_name = "John"
last_name = "Doe"
religion = "Buddhist"
created_at = "2024-01-01T00:00:00Z"
updated_at = "2024-01-01T00:00:00Z"
"#;
        let profile: UserProfile = toml::from_str(toml_str).unwrap();
        assert_eq!(profile.religion.as_deref(), Some("Buddhist"));
        assert_eq!(profile.preferences, UserPreferences::default());
        assert!(profile.bio.is_none());
    }
}
