//! Static advice tables.
//!
//! Outer level: one [`ReligionEntry`] per [`Religion`], with `Unspecified`
//! doubling as the fallback for unknown traditions. Inner level: tag-keyed
//! tables, each with its own fallback for tags outside the known set.
//! Inner tags are matched against the trimmed, lowercased input.
//!
//! `Unspecified` content must stay secular: no prayer, no faith.

use super::religion::Religion;

/// Tag → single string, with a fallback.
pub(crate) struct TextTable {
    by_tag: &'static [(&'static str, &'static str)],
    fallback: &'static str,
}

impl TextTable {
    pub(crate) fn lookup(&self, tag: &str) -> &'static str {
        let tag = tag.trim().to_lowercase();
        self.by_tag
            .iter()
            .find(|(key, _)| *key == tag)
            .map(|(_, text)| *text)
            .unwrap_or(self.fallback)
    }
}

/// Tag → list of strings, with a fallback list.
pub(crate) struct ListTable {
    by_tag: &'static [(&'static str, &'static [&'static str])],
    fallback: &'static [&'static str],
}

impl ListTable {
    pub(crate) fn lookup(&self, tag: &str) -> &'static [&'static str] {
        let tag = tag.trim().to_lowercase();
        self.by_tag
            .iter()
            .find(|(key, _)| *key == tag)
            .map(|(_, entries)| *entries)
            .unwrap_or(self.fallback)
    }
}

/// Everything the catalog knows about one tradition.
pub(crate) struct ReligionEntry {
    pub(crate) advice: TextTable,
    pub(crate) practices: &'static [&'static str],
    pub(crate) quotes: ListTable,
    pub(crate) stories: ListTable,
    pub(crate) teachings: ListTable,
    pub(crate) community_resources: &'static [&'static str],
    pub(crate) support_groups: ListTable,
    /// Text before and after the interpolated therapy recommendation
    pub(crate) therapy_bridge: (&'static str, &'static str),
}

/// Returns the entry for `religion`.
pub(crate) fn entry(religion: Religion) -> &'static ReligionEntry {
    match religion {
        Religion::Christian => &CHRISTIAN,
        Religion::Muslim => &MUSLIM,
        Religion::Buddhist => &BUDDHIST,
        Religion::Hindu => &HINDU,
        Religion::Jewish => &JEWISH,
        Religion::Unspecified => &UNSPECIFIED,
    }
}

static CHRISTIAN: ReligionEntry = ReligionEntry {
    advice: TextTable {
        by_tag: &[
            (
                "anxiety",
                "Remember that God is with you in your anxiety. 'Cast all your anxiety on him because he cares for you' (1 Peter 5:7). Try prayer and meditation on God's promises.",
            ),
            (
                "depression",
                "God understands your pain. 'The Lord is close to the brokenhearted and saves those who are crushed in spirit' (Psalm 34:18). Seek support from your faith community.",
            ),
            (
                "stress",
                "Trust in God's plan. 'Come to me, all you who are weary and burdened, and I will give you rest' (Matthew 11:28). Practice prayer and reflection.",
            ),
            (
                "grief",
                "'Blessed are those who mourn, for they will be comforted' (Matthew 5:4). Let your faith community walk beside you, and bring your grief to God in prayer.",
            ),
        ],
        fallback: "Turn to God in prayer and seek guidance from your faith community.",
    },
    practices: &[
        "Morning and evening prayer",
        "Reading scripture",
        "Attending church services",
        "Practicing gratitude",
    ],
    quotes: ListTable {
        by_tag: &[
            (
                "hope",
                &[
                    "For I know the plans I have for you, plans to give you hope and a future. - Jeremiah 29:11",
                    "May the God of hope fill you with all joy and peace as you trust in him. - Romans 15:13",
                ],
            ),
            (
                "anxiety",
                &["Cast all your anxiety on him because he cares for you. - 1 Peter 5:7"],
            ),
        ],
        fallback: &[
            "Cast all your anxiety on him because he cares for you. - 1 Peter 5:7",
            "Come to me, all you who are weary and burdened, and I will give you rest. - Matthew 11:28",
        ],
    },
    stories: ListTable {
        by_tag: &[(
            "forgiveness",
            &["The parable of the prodigal son teaches us that we are always welcomed home."],
        )],
        fallback: &["The story of Job teaches us about patience and faith in difficult times."],
    },
    teachings: ListTable {
        by_tag: &[(
            "suffering",
            &["Christian teachings hold that suffering can produce perseverance, character, and hope (Romans 5:3-4)."],
        )],
        fallback: &["Christian teachings emphasize love, forgiveness, and hope."],
    },
    community_resources: &[
        "Local churches",
        "Christian counseling centers",
        "Prayer groups",
    ],
    support_groups: ListTable {
        by_tag: &[(
            "anxiety",
            &[
                "Christian anxiety support groups",
                "Prayer groups",
                "Bible study groups",
            ],
        )],
        fallback: &[
            "Christian support groups",
            "Prayer groups",
            "Bible study groups",
        ],
    },
    therapy_bridge: (
        "Combine your faith with therapy: ",
        ". Remember that God is with you in your healing journey.",
    ),
};

static MUSLIM: ReligionEntry = ReligionEntry {
    advice: TextTable {
        by_tag: &[
            (
                "anxiety",
                "Remember that Allah is with you. 'And whoever relies upon Allah - then He is sufficient for him' (Quran 65:3). Practice prayer and dhikr.",
            ),
            (
                "depression",
                "Allah knows your struggles. 'And We will surely test you with something of fear and hunger' (Quran 2:155). Seek support from your community.",
            ),
            (
                "stress",
                "Trust in Allah's plan. 'And it may be that you dislike a thing which is good for you' (Quran 2:216). Practice patience and prayer.",
            ),
            (
                "grief",
                "'Indeed we belong to Allah, and indeed to Him we will return' (Quran 2:156). Lean on your community and remember the reward of patience.",
            ),
        ],
        fallback: "Turn to Allah in prayer and seek guidance from your community.",
    },
    practices: &[
        "Daily prayer (Salah)",
        "Dhikr (remembrance of Allah)",
        "Reading the Quran",
        "Practicing patience (sabr)",
    ],
    quotes: ListTable {
        by_tag: &[(
            "hope",
            &["So verily, with hardship, there is relief. - Quran 94:5"],
        )],
        fallback: &[
            "And whoever relies upon Allah - then He is sufficient for him. - Quran 65:3",
            "And it may be that you dislike a thing which is good for you. - Quran 2:216",
        ],
    },
    stories: ListTable {
        by_tag: &[(
            "patience",
            &["The story of Prophet Yusuf teaches us about patience and trust in Allah."],
        )],
        fallback: &["The story of Prophet Yunus in the belly of the whale teaches us that no situation is beyond Allah's mercy."],
    },
    teachings: ListTable {
        by_tag: &[(
            "patience",
            &["Islamic teachings describe sabr (patience) as half of faith."],
        )],
        fallback: &["Islamic teachings emphasize submission to Allah and community support."],
    },
    community_resources: &["Local mosques", "Islamic centers", "Community support groups"],
    support_groups: ListTable {
        by_tag: &[],
        fallback: &[
            "Islamic support groups",
            "Community prayer groups",
            "Quran study groups",
        ],
    },
    therapy_bridge: (
        "Integrate Islamic practices with therapy: ",
        ". Trust in Allah's plan for your healing.",
    ),
};

static BUDDHIST: ReligionEntry = ReligionEntry {
    advice: TextTable {
        by_tag: &[
            (
                "anxiety",
                "Practice mindfulness and compassion. Remember that suffering is part of life, but you can find peace through meditation and understanding.",
            ),
            (
                "depression",
                "Cultivate loving-kindness toward yourself. Practice meditation and seek support from your sangha (community).",
            ),
            (
                "stress",
                "Practice mindfulness and acceptance. Remember that all things are impermanent, including your current stress.",
            ),
            (
                "anger",
                "Meet your anger with mindfulness and compassion. Notice it arise, breathe with it, and let it pass without acting on it.",
            ),
        ],
        fallback: "Practice mindfulness and seek guidance from your community.",
    },
    practices: &[
        "Sitting meditation",
        "Daily mindfulness practice",
        "Compassion meditation (metta)",
        "Walking meditation",
    ],
    quotes: ListTable {
        by_tag: &[(
            "peace",
            &["Peace comes from within. Do not seek it without. - Buddha"],
        )],
        fallback: &[
            "The mind is everything. What you think you become. - Buddha",
            "Peace comes from within. Do not seek it without. - Buddha",
        ],
    },
    stories: ListTable {
        by_tag: &[(
            "grief",
            &["The story of Kisa Gotami and the mustard seed teaches us that loss touches every household."],
        )],
        fallback: &["The story of the Buddha's enlightenment teaches us about overcoming suffering."],
    },
    teachings: ListTable {
        by_tag: &[(
            "suffering",
            &[
                "The Four Noble Truths explain that suffering exists, has a cause, can end, and that there is a path to its end.",
                "The Eightfold Path offers right view, intention, speech, action, livelihood, effort, mindfulness, and concentration.",
            ],
        )],
        fallback: &["Buddhist teachings emphasize the Four Noble Truths and the Eightfold Path."],
    },
    community_resources: &["Local temples", "Meditation centers", "Sangha communities"],
    support_groups: ListTable {
        by_tag: &[],
        fallback: &["Meditation groups", "Sangha communities", "Dharma study groups"],
    },
    therapy_bridge: (
        "Combine Buddhist practices with therapy: ",
        ". Practice mindfulness and compassion.",
    ),
};

static HINDU: ReligionEntry = ReligionEntry {
    advice: TextTable {
        by_tag: &[
            (
                "anxiety",
                "Practice yoga and meditation. Remember that you are part of the divine and can find peace through spiritual practices.",
            ),
            (
                "depression",
                "Cultivate self-compassion and practice dharma. Seek support from your community and spiritual practices.",
            ),
            (
                "stress",
                "Practice yoga and meditation. Remember that all experiences are part of your spiritual journey.",
            ),
        ],
        fallback: "Practice yoga and meditation, and seek guidance from your community.",
    },
    practices: &[
        "Yoga",
        "Breath-focused meditation",
        "Puja (worship)",
        "Practicing dharma",
    ],
    quotes: ListTable {
        by_tag: &[],
        fallback: &[
            "You have a right to your actions, but never to the fruits of your actions. - Bhagavad Gita 2:47",
            "The soul is neither born, and nor does it die. - Bhagavad Gita 2:20",
        ],
    },
    stories: ListTable {
        by_tag: &[],
        fallback: &["Arjuna's doubt on the battlefield of Kurukshetra teaches us to act with courage when the way feels unclear."],
    },
    teachings: ListTable {
        by_tag: &[(
            "karma",
            &["Hindu teachings on karma remind us that our actions shape our path, and that we can always choose the next right action."],
        )],
        fallback: &["Hindu teachings emphasize dharma, karma, and the unity of all beings."],
    },
    community_resources: &["Local mandirs", "Yoga and meditation centers", "Satsang groups"],
    support_groups: ListTable {
        by_tag: &[],
        fallback: &["Satsang groups", "Bhagavad Gita study circles", "Yoga communities"],
    },
    therapy_bridge: (
        "Combine your spiritual practice with therapy: ",
        ". Let yoga and meditation support your healing.",
    ),
};

static JEWISH: ReligionEntry = ReligionEntry {
    advice: TextTable {
        by_tag: &[
            (
                "anxiety",
                "Remember that God is with you. Practice prayer and seek support from your community. 'The Lord is my shepherd' (Psalm 23).",
            ),
            (
                "depression",
                "God understands your pain. Seek support from your community and practice prayer and reflection.",
            ),
            (
                "stress",
                "Trust in God's plan. Practice prayer and seek support from your community.",
            ),
            (
                "grief",
                "Jewish tradition surrounds mourners with community through shiva and the Mourner's Kaddish. Let others carry some of this weight with you.",
            ),
        ],
        fallback: "Turn to God in prayer and seek guidance from your community.",
    },
    practices: &[
        "Daily prayer",
        "Reading Torah",
        "Attending synagogue",
        "Practicing mitzvot",
    ],
    quotes: ListTable {
        by_tag: &[],
        fallback: &[
            "The Lord is my shepherd; I shall not want. - Psalm 23:1",
            "It is not your duty to finish the work, but neither are you free to desist from it. - Pirkei Avot 2:16",
        ],
    },
    stories: ListTable {
        by_tag: &[],
        fallback: &["The Exodus from Egypt teaches us that liberation can follow even the longest hardship."],
    },
    teachings: ListTable {
        by_tag: &[],
        fallback: &["Jewish teachings emphasize community, tradition, and tikkun olam (repairing the world)."],
    },
    community_resources: &["Local synagogues", "Jewish family services", "Chevra kadisha and bereavement groups"],
    support_groups: ListTable {
        by_tag: &[],
        fallback: &["Jewish support groups", "Torah study groups", "Synagogue wellness circles"],
    },
    therapy_bridge: (
        "Bring your tradition into therapy: ",
        ". Your community can support your healing.",
    ),
};

static UNSPECIFIED: ReligionEntry = ReligionEntry {
    advice: TextTable {
        by_tag: &[
            (
                "anxiety",
                "Try grounding yourself: slow your breathing and name five things you can see around you. Consider seeking support from your community and practicing self-care.",
            ),
            (
                "depression",
                "Be gentle with yourself and keep small routines going. Consider seeking support from your community and a mental health professional.",
            ),
        ],
        fallback: "Consider seeking support from your community and practicing self-care.",
    },
    practices: &[
        "Quiet meditation",
        "Mindfulness",
        "Self-reflection journaling",
        "Community support",
    ],
    quotes: ListTable {
        by_tag: &[],
        fallback: &["Seek wisdom and guidance from your community."],
    },
    stories: ListTable {
        by_tag: &[],
        fallback: &["Seek stories and teachings from your community."],
    },
    teachings: ListTable {
        by_tag: &[],
        fallback: &["Seek teachings and guidance from your community."],
    },
    community_resources: &["Local community centers", "Wellness centers", "Support groups"],
    support_groups: ListTable {
        by_tag: &[],
        fallback: &["Peer support groups", "Community wellness groups", "Counseling services"],
    },
    therapy_bridge: ("Integrate your personal practices with therapy: ", "."),
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_inner_lookup_is_case_insensitive_with_fallback() {
        let advice = &entry(Religion::Christian).advice;
        assert!(advice.lookup("  ANXIETY ").contains("1 Peter 5:7"));
        assert_eq!(advice.lookup("loneliness"), advice.fallback);
    }

    #[test]
    fn test_unspecified_content_is_secular() {
        let e = entry(Religion::Unspecified);
        let mut texts: Vec<&str> = e.advice.by_tag.iter().map(|(_, t)| *t).collect();
        texts.push(e.advice.fallback);
        texts.extend(e.practices.iter().copied());
        texts.push(e.therapy_bridge.0);

        for text in texts {
            let lower = text.to_lowercase();
            assert!(!lower.contains("prayer"), "{text}");
            assert!(!lower.contains("faith"), "{text}");
        }
    }

    #[test]
    fn test_no_list_is_empty() {
        for religion in Religion::iter() {
            let e = entry(religion);
            assert!(!e.practices.is_empty());
            assert!(!e.community_resources.is_empty());
            assert!(!e.quotes.lookup("anything").is_empty());
            assert!(!e.stories.lookup("anything").is_empty());
            assert!(!e.teachings.lookup("anything").is_empty());
            assert!(!e.support_groups.lookup("anything").is_empty());
        }
    }
}
