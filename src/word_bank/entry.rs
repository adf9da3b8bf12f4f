//! Word descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Difficulty tier of a word.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Short, concrete words.
    Easy,
    /// The default tier.
    #[default]
    Medium,
    /// Abstract or compound words.
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lower-case name, as used on the wire and in word-list file names.
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Word-list file name for this tier (`easy.json`, ...).
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A target word together with the answers accepted for it.
///
/// Loaded once from static data and never mutated by matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Stable identifier, unique across the whole bank.
    pub id: String,
    /// Canonical spelling.
    pub word: String,
    /// Alternative spellings accepted as fully correct.
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Category shown to players (동물, 음식, ...).
    #[serde(default)]
    pub category: String,
    /// Difficulty tier.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Optional hints revealed during a round.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

impl WordEntry {
    /// Create an entry with no synonyms, category or hints.
    pub fn new(id: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            synonyms: Vec::new(),
            category: String::new(),
            difficulty: Difficulty::default(),
            hints: Vec::new(),
        }
    }

    /// Set the accepted synonyms.
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }

    /// Set the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the difficulty tier.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Canonical word followed by its synonyms, in list order.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.word.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }
}
