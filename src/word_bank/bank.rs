//! In-memory word bank grouped by difficulty.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{Result, WordBankError};
use super::{Difficulty, WordEntry};

/// Below this many words a tier is reported by [`WordBank::validate`].
pub const MIN_WORDS_PER_DIFFICULTY: usize = 10;

/// On-disk shape of a word-list file.
#[derive(Debug, Deserialize, Serialize)]
struct WordFile {
    words: Vec<WordEntry>,
}

/// A problem found by [`WordBank::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A tier holds fewer than [`MIN_WORDS_PER_DIFFICULTY`] words.
    TooFewWords {
        /// Affected tier.
        difficulty: Difficulty,
        /// Number of words it holds.
        count: usize,
    },
    /// The same id appears more than once across the bank.
    DuplicateId(String),
    /// An entry's word is empty or whitespace.
    EmptyWord {
        /// Tier the entry is stored under.
        difficulty: Difficulty,
        /// Entry id.
        id: String,
    },
    /// An entry has no synonyms.
    NoSynonyms(String),
    /// An entry has no category.
    NoCategory(String),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::TooFewWords { difficulty, count } => write!(
                f,
                "{} has only {} words (recommended minimum: 100)",
                difficulty, count
            ),
            ValidationIssue::DuplicateId(id) => write!(f, "Duplicate ID found: {}", id),
            ValidationIssue::EmptyWord { difficulty, id } => {
                write!(f, "Empty word in {}: {}", difficulty, id)
            }
            ValidationIssue::NoSynonyms(id) => write!(f, "No synonyms for {}", id),
            ValidationIssue::NoCategory(id) => write!(f, "No category for {}", id),
        }
    }
}

/// Result of [`WordBank::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Every issue found, in bank order.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when no issue was found.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Word counts per tier and per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordStatistics {
    /// Total number of words.
    pub total: usize,
    /// Words in the easy tier.
    pub easy: usize,
    /// Words in the medium tier.
    pub medium: usize,
    /// Words in the hard tier.
    pub hard: usize,
    /// Words per category label.
    pub categories: BTreeMap<String, usize>,
}

/// Word lists for every difficulty tier.
///
/// Entries are stored under the tier they were loaded for, which is the
/// tier [`random_word`](Self::random_word) draws from.
///
/// # Example
///
/// ```rust
/// use jamo_match::word_bank::{Difficulty, WordBank, WordEntry};
/// use rand::SeedableRng;
/// use rustc_hash::FxHashSet;
///
/// let bank = WordBank::from_entries([
///     WordEntry::new("e1", "사자").with_difficulty(Difficulty::Easy),
///     WordEntry::new("e2", "기린").with_difficulty(Difficulty::Easy),
/// ]);
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let mut used = FxHashSet::default();
/// used.insert("e1".to_string());
///
/// let word = bank.random_word(Difficulty::Easy, &used, &mut rng).unwrap();
/// assert_eq!(word.id, "e2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    words: BTreeMap<Difficulty, Vec<WordEntry>>,
}

impl WordBank {
    /// Create an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bank from entries, grouping them by their own difficulty.
    pub fn from_entries(entries: impl IntoIterator<Item = WordEntry>) -> Self {
        let mut bank = Self::new();
        for entry in entries {
            bank.words.entry(entry.difficulty).or_default().push(entry);
        }
        bank
    }

    /// Build a bank holding a single tier parsed from JSON.
    pub fn from_json(difficulty: Difficulty, json: &str) -> Result<Self> {
        let mut bank = Self::new();
        bank.add_json(difficulty, json)?;
        Ok(bank)
    }

    /// Parse a `{ "words": [...] }` list and append it to a tier.
    ///
    /// Returns the number of words added.
    pub fn add_json(&mut self, difficulty: Difficulty, json: &str) -> Result<usize> {
        let file: WordFile = serde_json::from_str(json)
            .map_err(|source| WordBankError::Parse { difficulty, source })?;
        let added = file.words.len();
        self.words.entry(difficulty).or_default().extend(file.words);
        debug!(%difficulty, added, "Loaded word list");
        Ok(added)
    }

    /// Read a word-list file and append it to a tier.
    pub fn load_file(&mut self, difficulty: Difficulty, path: &Path) -> Result<usize> {
        let contents = std::fs::read_to_string(path).map_err(|source| WordBankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_json(difficulty, &contents)
    }

    /// Load `easy.json`, `medium.json` and `hard.json` from a directory.
    ///
    /// Validation problems are logged as warnings but do not fail the load.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut bank = Self::new();
        for difficulty in Difficulty::ALL {
            bank.load_file(difficulty, &dir.join(difficulty.file_name()))?;
        }

        let report = bank.validate();
        for issue in &report.issues {
            warn!(dir = %dir.display(), "Word bank: {}", issue);
        }

        Ok(bank)
    }

    /// Pick a random word of a tier whose id is not in `exclude_ids`.
    ///
    /// Returns `None` when every word of the tier has been used.
    pub fn random_word<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        exclude_ids: &FxHashSet<String>,
        rng: &mut R,
    ) -> Option<&WordEntry> {
        let available: Vec<&WordEntry> = self
            .words_by_difficulty(difficulty)
            .iter()
            .filter(|entry| !exclude_ids.contains(&entry.id))
            .collect();

        let picked = available.choose(rng).copied();
        debug!(
            %difficulty,
            available = available.len(),
            picked = picked.map(|entry| entry.id.as_str()),
            "Random word selection"
        );
        picked
    }

    /// Look up an entry by id across all tiers.
    pub fn word_by_id(&self, id: &str) -> Option<&WordEntry> {
        self.words.values().flatten().find(|entry| entry.id == id)
    }

    /// All entries of a tier, in load order.
    pub fn words_by_difficulty(&self, difficulty: Difficulty) -> &[WordEntry] {
        self.words
            .get(&difficulty)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of entries across all tiers.
    pub fn total_count(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    /// Number of entries in a tier.
    pub fn count_by_difficulty(&self, difficulty: Difficulty) -> usize {
        self.words_by_difficulty(difficulty).len()
    }

    /// Returns true if the bank holds no entries.
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Check the bank for structural problems.
    ///
    /// Reports tiers with fewer than [`MIN_WORDS_PER_DIFFICULTY`] words,
    /// duplicate ids, empty words, and entries missing synonyms or a category.
    pub fn validate(&self) -> ValidationReport {
        let mut issues = Vec::new();
        let mut seen_ids = FxHashSet::default();

        for difficulty in Difficulty::ALL {
            let words = self.words_by_difficulty(difficulty);
            if words.len() < MIN_WORDS_PER_DIFFICULTY {
                issues.push(ValidationIssue::TooFewWords {
                    difficulty,
                    count: words.len(),
                });
            }

            for entry in words {
                if !seen_ids.insert(entry.id.as_str()) {
                    issues.push(ValidationIssue::DuplicateId(entry.id.clone()));
                }
                if entry.word.trim().is_empty() {
                    issues.push(ValidationIssue::EmptyWord {
                        difficulty,
                        id: entry.id.clone(),
                    });
                }
                if entry.synonyms.is_empty() {
                    issues.push(ValidationIssue::NoSynonyms(entry.id.clone()));
                }
                if entry.category.is_empty() {
                    issues.push(ValidationIssue::NoCategory(entry.id.clone()));
                }
            }
        }

        ValidationReport { issues }
    }

    /// Count words per tier and per category.
    pub fn statistics(&self) -> WordStatistics {
        let mut categories = BTreeMap::new();
        for entry in self.words.values().flatten() {
            *categories.entry(entry.category.clone()).or_insert(0) += 1;
        }

        WordStatistics {
            total: self.total_count(),
            easy: self.count_by_difficulty(Difficulty::Easy),
            medium: self.count_by_difficulty(Difficulty::Medium),
            hard: self.count_by_difficulty(Difficulty::Hard),
            categories,
        }
    }
}
