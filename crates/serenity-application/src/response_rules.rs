//! Keyword rules for the local assistant reply.
//!
//! Rules are checked in order against the lowercased input and the first
//! one with a matching keyword wins. Input matching no rule gets the
//! general template, so every input has exactly one reply.

/// Emotional bucket an input is sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCategory {
    Crisis,
    Anxiety,
    Sadness,
    Positive,
    General,
}

struct Rule {
    category: ResponseCategory,
    keywords: &'static [&'static str],
}

/// Priority order matters: crisis language must win over everything else.
const RULES: &[Rule] = &[
    Rule {
        category: ResponseCategory::Crisis,
        keywords: &["crisis", "emergency", "immediate help"],
    },
    Rule {
        category: ResponseCategory::Anxiety,
        keywords: &["anxious", "worried", "nervous"],
    },
    Rule {
        category: ResponseCategory::Sadness,
        keywords: &["sad", "depressed", "down"],
    },
    Rule {
        category: ResponseCategory::Positive,
        keywords: &["great", "happy", "wonderful"],
    },
];

const CRISIS_TEMPLATE: &str = "I can hear that you're in crisis and need immediate support. \
Your safety and wellbeing are the most important things right now. \
Please reach out to emergency services (911) or a crisis hotline (988) immediately. \
You don't have to face this alone - there are people who care about you and want to help.";

const ANXIETY_TEMPLATE: &str = "I can sense the restlessness and worry in your message. \
Let's work through this systematically. \
Try the 4-7-8 breathing technique: inhale for 4 counts, hold for 7, exhale for 8. \
What specific thoughts are making you feel anxious right now?";

const SADNESS_TEMPLATE: &str = "I can feel the weight of sadness in your words, and it's okay to feel down. \
Let's explore this together. \
Sometimes writing about our feelings helps us understand them better. \
What triggered these feelings, and how long have you been experiencing them?";

const POSITIVE_TEMPLATE: &str = "I can feel the lightness and joy radiating from your words! \
This is wonderful to witness. \
What specifically is contributing to this positive feeling? \
Let's explore how you can create more of these great moments.";

const GENERAL_TEMPLATE: &str = "I can feel the depth of what you're sharing with me. \
Let's work through this together systematically. \
What's the main challenge you're facing right now, and how can I best support you in this process?";

impl ResponseCategory {
    /// Sorts free text into a bucket, case-insensitively.
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| lower.contains(keyword)))
            .map(|rule| rule.category)
            .unwrap_or(ResponseCategory::General)
    }

    /// The canned reply for this bucket.
    pub fn template(self) -> &'static str {
        match self {
            ResponseCategory::Crisis => CRISIS_TEMPLATE,
            ResponseCategory::Anxiety => ANXIETY_TEMPLATE,
            ResponseCategory::Sadness => SADNESS_TEMPLATE,
            ResponseCategory::Positive => POSITIVE_TEMPLATE,
            ResponseCategory::General => GENERAL_TEMPLATE,
        }
    }
}
