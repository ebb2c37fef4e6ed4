use strum::{Display, EnumIter, EnumString};

/// A religious tradition the advice catalog has content for.
///
/// Tags are parsed case-insensitively. Anything outside the set, including
/// non-religious answers such as "Atheist" or "None", resolves to
/// `Unspecified`, whose content stays secular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Religion {
    #[strum(to_string = "Christian", serialize = "Christianity")]
    Christian,
    #[strum(to_string = "Muslim", serialize = "Islamic", serialize = "Islam")]
    Muslim,
    #[strum(to_string = "Buddhist", serialize = "Buddhism")]
    Buddhist,
    #[strum(to_string = "Hindu", serialize = "Hinduism")]
    Hindu,
    #[strum(to_string = "Jewish", serialize = "Judaism")]
    Jewish,
    Unspecified,
}

impl Religion {
    /// Parses a free-form tag, falling back to `Unspecified`.
    pub fn from_tag(tag: &str) -> Self {
        tag.trim().parse().unwrap_or(Religion::Unspecified)
    }

    /// Resolves an optional profile attribute.
    pub fn from_profile_tag(tag: Option<&str>) -> Self {
        tag.map(Self::from_tag).unwrap_or(Religion::Unspecified)
    }
}
