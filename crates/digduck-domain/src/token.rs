//! Tagged token module

/// Part-of-speech category for nouns (名詞)
pub const NOUN: &str = "名詞";

/// Noun subcategory for personal names (人名)
pub const PERSON_NAME: &str = "人名";

/// Part-of-speech category for verbs (動詞)
pub const VERB: &str = "動詞";

/// A (surface form, part-of-speech) pair produced by morphological analysis
///
/// `pos` holds the analyzer's full hyphen-joined tag, for example
/// `名詞-固有名詞-人名-姓`. Category checks are substring matches on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Surface form as it appears in the sentence
    pub surface: String,

    /// Part-of-speech tag
    pub pos: String,
}

impl TaggedToken {
    /// Create a new tagged token
    pub fn new(surface: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            pos: pos.into(),
        }
    }

    /// Tag carries the noun category
    pub fn is_noun(&self) -> bool {
        self.pos.contains(NOUN)
    }

    /// Tag marks a personal name
    pub fn is_person_name(&self) -> bool {
        self.pos.contains(PERSON_NAME)
    }

    /// Tag carries the verb category
    ///
    /// This is a substring check, so auxiliary verbs (助動詞) count as well.
    pub fn is_verb(&self) -> bool {
        self.pos.contains(VERB)
    }

    /// Surface form contains any of the given titles
    pub fn mentions_any<S: AsRef<str>>(&self, titles: &[S]) -> bool {
        titles
            .iter()
            .any(|title| self.surface.contains(title.as_ref()))
    }
}
