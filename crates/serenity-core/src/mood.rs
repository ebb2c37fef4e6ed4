//! Mood scale shared by mood logging and session scoring.

/// Lowest value on the mood scale.
pub const MIN_MOOD: i32 = 1;
/// Highest value on the mood scale.
pub const MAX_MOOD: i32 = 10;
/// Value preselected when the user has not rated their mood yet.
pub const DEFAULT_MOOD: i32 = 5;
/// Ratings at or below this are treated as a low mood.
pub const LOW_MOOD_THRESHOLD: i32 = 3;

/// Returns true if `mood` lies on the 1..=10 scale.
pub fn is_valid_mood(mood: i32) -> bool {
    (MIN_MOOD..=MAX_MOOD).contains(&mood)
}

/// Returns true for ratings that should trigger gentler suggestions.
pub fn is_low_mood(mood: i32) -> bool {
    is_valid_mood(mood) && mood <= LOW_MOOD_THRESHOLD
}

/// Emoji for a mood value; out-of-range values get a question mark.
pub fn mood_emoji(mood: i32) -> &'static str {
    match mood {
        1..=2 => "😢",
        3..=4 => "😔",
        5 => "😐",
        6..=7 => "😊",
        8..=9 => "😄",
        10 => "🤩",
        _ => "❓",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emoji_bands() {
        assert_eq!(mood_emoji(1), "😢");
        assert_eq!(mood_emoji(2), "😢");
        assert_eq!(mood_emoji(4), "😔");
        assert_eq!(mood_emoji(5), "😐");
        assert_eq!(mood_emoji(7), "😊");
        assert_eq!(mood_emoji(9), "😄");
        assert_eq!(mood_emoji(10), "🤩");
    }

    #[test]
    fn test_out_of_range_is_unknown() {
        assert_eq!(mood_emoji(0), "❓");
        assert_eq!(mood_emoji(11), "❓");
        assert_eq!(mood_emoji(-3), "❓");
    }

    #[test]
    fn test_low_mood_requires_valid_value() {
        assert!(is_low_mood(MIN_MOOD));
        assert!(is_low_mood(LOW_MOOD_THRESHOLD));
        assert!(!is_low_mood(4));
        assert!(!is_low_mood(0));
        assert!(is_valid_mood(DEFAULT_MOOD));
    }
}
