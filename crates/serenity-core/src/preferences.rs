//! Key/value preference store interface.
//!
//! Values are grouped by namespace. Getters never fail: a missing key, or a
//! key holding a value of another type, yields the supplied default.

use crate::error::Result;

/// Namespace used for app-wide preferences.
pub const PREFS_NAMESPACE: &str = "serenity_ai_prefs";

/// Well-known preference keys.
pub mod keys {
    pub const USER_ID: &str = "user_id";
    pub const IS_FIRST_LAUNCH: &str = "is_first_launch";
    pub const THEME: &str = "theme";
    pub const NOTIFICATIONS_ENABLED: &str = "notifications_enabled";
    pub const REMINDER_TIME: &str = "reminder_time";
}

/// Namespaced string/bool/int preference storage.
pub trait PreferenceStore: Send + Sync {
    fn get_string(&self, namespace: &str, key: &str, default: &str) -> String;
    fn set_string(&self, namespace: &str, key: &str, value: &str) -> Result<()>;

    fn get_bool(&self, namespace: &str, key: &str, default: bool) -> bool;
    fn set_bool(&self, namespace: &str, key: &str, value: bool) -> Result<()>;

    fn get_int(&self, namespace: &str, key: &str, default: i64) -> i64;
    fn set_int(&self, namespace: &str, key: &str, value: i64) -> Result<()>;

    /// Removes a key. Removing a missing key is not an error.
    fn remove(&self, namespace: &str, key: &str) -> Result<()>;
}
