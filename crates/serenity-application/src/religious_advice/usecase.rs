//! ReligiousAdviceUseCase - faith-aware suggestions from the static catalog.
//!
//! All lookups are total: unknown religions fall back to secular community
//! suggestions and unknown tags fall back to the religion's general entry.

use super::catalog::{self, ReligionEntry};
use super::religion::Religion;
use serenity_core::mood;
use serenity_core::user::UserProfile;

/// Appended to practice lists when the user reports a low mood.
const LOW_MOOD_OUTREACH: &str =
    "Reach out to someone you trust today, or a counselor if things feel heavy";

/// Lookup use case over the religious advice catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReligiousAdviceUseCase;

impl ReligiousAdviceUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Advice for `issue` in the tradition named on the profile.
    pub fn provide_religious_advice(&self, profile: &UserProfile, issue: &str) -> String {
        let religion = Religion::from_profile_tag(profile.religion.as_deref());
        tracing::debug!(
            "[ReligiousAdviceUseCase] Advice lookup: religion={}, issue={}",
            religion,
            issue
        );
        catalog::entry(religion).advice.lookup(issue).to_string()
    }

    /// Daily practices for a tradition.
    ///
    /// A low `mood` (see [`mood::is_low_mood`]) adds a suggestion to reach
    /// out to another person.
    pub fn suggest_spiritual_practices(&self, religion: &str, mood: i32) -> Vec<String> {
        let mut practices = owned_list(lookup(religion).practices);
        if mood::is_low_mood(mood) {
            practices.push(LOW_MOOD_OUTREACH.to_string());
        }
        practices
    }

    pub fn get_religious_quotes(&self, religion: &str, topic: &str) -> Vec<String> {
        owned_list(lookup(religion).quotes.lookup(topic))
    }

    pub fn get_religious_stories(&self, religion: &str, lesson: &str) -> Vec<String> {
        owned_list(lookup(religion).stories.lookup(lesson))
    }

    pub fn get_religious_teachings(&self, religion: &str, concept: &str) -> Vec<String> {
        owned_list(lookup(religion).teachings.lookup(concept))
    }

    /// Places of worship and support. A non-blank `location` is appended to each entry.
    pub fn get_religious_community_resources(&self, religion: &str, location: &str) -> Vec<String> {
        let location = location.trim();
        lookup(religion)
            .community_resources
            .iter()
            .map(|resource| {
                if location.is_empty() {
                    resource.to_string()
                } else {
                    format!("{resource} in {location}")
                }
            })
            .collect()
    }

    pub fn get_religious_support_groups(&self, religion: &str, issue: &str) -> Vec<String> {
        owned_list(lookup(religion).support_groups.lookup(issue))
    }

    /// Frames a therapy recommendation in the profile's tradition.
    ///
    /// The recommendation text is kept as given.
    pub fn integrate_with_therapy(&self, profile: &UserProfile, recommendation: &str) -> String {
        let religion = Religion::from_profile_tag(profile.religion.as_deref());
        let (prefix, suffix) = catalog::entry(religion).therapy_bridge;
        let suffix = if recommendation.ends_with('.') {
            suffix.strip_prefix('.').unwrap_or(suffix)
        } else {
            suffix
        };
        format!("{prefix}{recommendation}{suffix}")
    }
}

fn lookup(religion: &str) -> &'static ReligionEntry {
    catalog::entry(Religion::from_tag(religion))
}

fn owned_list(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|entry| entry.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(religion: &str) -> UserProfile {
        UserProfile::new("user123", "John", "Doe").with_religion(religion)
    }

    #[test]
    fn test_christian_anxiety_mentions_prayer() {
        let usecase = ReligiousAdviceUseCase::new();
        let advice = usecase.provide_religious_advice(&profile("Christian"), "anxiety");
        assert!(advice.contains("prayer"));
    }

    #[test]
    fn test_muslim_stress_mentions_patience() {
        let usecase = ReligiousAdviceUseCase::new();
        let advice = usecase.provide_religious_advice(&profile("Muslim"), "stress");
        assert!(advice.contains("patience"));
    }

    #[test]
    fn test_islamic_alias_matches_muslim() {
        let usecase = ReligiousAdviceUseCase::new();
        assert_eq!(
            usecase.provide_religious_advice(&profile("Islamic"), "stress"),
            usecase.provide_religious_advice(&profile("Muslim"), "stress")
        );
    }

    #[test]
    fn test_buddhist_anger() {
        let usecase = ReligiousAdviceUseCase::new();
        let advice = usecase.provide_religious_advice(&profile("Buddhist"), "anger");
        assert!(advice.contains("mindfulness") || advice.contains("compassion"));
    }

    #[test]
    fn test_hindu_depression_mentions_dharma() {
        let usecase = ReligiousAdviceUseCase::new();
        let advice = usecase.provide_religious_advice(&profile("Hindu"), "depression");
        assert!(advice.contains("dharma"));
    }

    #[test]
    fn test_jewish_grief() {
        let usecase = ReligiousAdviceUseCase::new();
        let advice = usecase.provide_religious_advice(&profile("Jewish"), "grief");
        assert!(advice.contains("community") || advice.contains("tradition"));
    }

    #[test]
    fn test_atheist_advice_is_secular() {
        let usecase = ReligiousAdviceUseCase::new();
        for issue in ["anxiety", "depression", "stress", "loneliness"] {
            let advice = usecase.provide_religious_advice(&profile("Atheist"), issue);
            assert!(!advice.contains("prayer") && !advice.contains("faith"), "{advice}");
        }
    }

    #[test]
    fn test_profile_without_religion_gets_secular_fallback() {
        let usecase = ReligiousAdviceUseCase::new();
        let profile = UserProfile::new("user123", "John", "Doe");
        let advice = usecase.provide_religious_advice(&profile, "work");
        assert_eq!(
            advice,
            "Consider seeking support from your community and practicing self-care."
        );
    }

    #[test]
    fn test_issue_tag_is_normalized() {
        let usecase = ReligiousAdviceUseCase::new();
        assert_eq!(
            usecase.provide_religious_advice(&profile("christian"), " Anxiety "),
            usecase.provide_religious_advice(&profile("Christian"), "anxiety")
        );
    }

    #[test]
    fn test_practices() {
        let usecase = ReligiousAdviceUseCase::new();

        let christian = usecase.suggest_spiritual_practices("Christian", 5);
        assert!(christian.iter().any(|p| p.contains("prayer")));

        let buddhist = usecase.suggest_spiritual_practices("Buddhist", 4);
        assert!(buddhist.iter().any(|p| p.contains("meditation")));
        assert!(buddhist.iter().any(|p| p.contains("mindfulness")));
    }

    #[test]
    fn test_low_mood_adds_outreach() {
        let usecase = ReligiousAdviceUseCase::new();
        let steady = usecase.suggest_spiritual_practices("Buddhist", 6);
        let low = usecase.suggest_spiritual_practices("Buddhist", 2);

        assert_eq!(low.len(), steady.len() + 1);
        assert_eq!(low.last().map(String::as_str), Some(LOW_MOOD_OUTREACH));
        assert!(low.iter().any(|p| p.contains("mindfulness")));
    }

    #[test]
    fn test_quotes_stories_teachings() {
        let usecase = ReligiousAdviceUseCase::new();

        let hope = usecase.get_religious_quotes("Christian", "hope");
        assert!(hope.iter().any(|q| q.contains("Jeremiah 29:11")));

        let patience = usecase.get_religious_stories("Muslim", "patience");
        assert!(patience[0].contains("Yusuf"));

        let suffering = usecase.get_religious_teachings("Buddhist", "suffering");
        assert!(suffering.iter().any(|t| t.contains("Four Noble Truths")));

        let unknown = usecase.get_religious_teachings("Buddhist", "gardening");
        assert_eq!(
            unknown,
            vec!["Buddhist teachings emphasize the Four Noble Truths and the Eightfold Path."]
        );
    }

    #[test]
    fn test_community_resources_with_location() {
        let usecase = ReligiousAdviceUseCase::new();

        let near = usecase.get_religious_community_resources("Christian", "New York");
        assert_eq!(near[0], "Local churches in New York");

        let anywhere = usecase.get_religious_community_resources("Christian", "  ");
        assert_eq!(anywhere[0], "Local churches");
    }

    #[test]
    fn test_support_groups_for_unknown_religion() {
        let usecase = ReligiousAdviceUseCase::new();
        let groups = usecase.get_religious_support_groups("Pastafarian", "anxiety");
        assert!(!groups.is_empty());
        assert!(groups.iter().all(|g| !g.contains("Prayer")));
    }

    #[test]
    fn test_integrate_with_therapy() {
        let usecase = ReligiousAdviceUseCase::new();
        let text = usecase.integrate_with_therapy(&profile("Christian"), "Try cognitive restructuring");
        assert_eq!(
            text,
            "Combine your faith with therapy: Try cognitive restructuring. Remember that God is with you in your healing journey."
        );

        let with_period =
            usecase.integrate_with_therapy(&profile("Christian"), "Keep a thought journal.");
        assert!(with_period.contains("Keep a thought journal. Remember"));
    }

    #[test]
    fn test_integrate_with_therapy_secular() {
        let usecase = ReligiousAdviceUseCase::new();
        let text = usecase.integrate_with_therapy(&profile("Atheist"), "Try cognitive restructuring");
        assert!(text.contains("cognitive"));
        assert!(!text.contains("faith"));
    }
}
