//! Match verdicts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which layer of the matcher produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Guess is identical to the canonical word.
    Exact,
    /// Guess is identical to one of the synonyms.
    Synonym,
    /// Guess equals the word or a synonym once whitespace and case are ignored.
    Normalized,
    /// Guess is close enough on the jamo level.
    Fuzzy,
    /// No layer accepted the guess.
    None,
}

impl MatchType {
    /// Lower-case name, as serialized.
    pub fn name(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Synonym => "synonym",
            MatchType::Normalized => "normalized",
            MatchType::Fuzzy => "fuzzy",
            MatchType::None => "none",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Verdict for a single guess.
///
/// `confidence` is `1.0` for exact and synonym matches, the configured
/// normalized confidence for normalized matches, the jamo similarity for
/// fuzzy matches and `0.0` when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Whether the guess is accepted.
    pub is_match: bool,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Layer that produced the verdict.
    pub match_type: MatchType,
}

impl MatchResult {
    /// Accepted by the exact layer.
    pub fn exact() -> Self {
        Self {
            is_match: true,
            confidence: 1.0,
            match_type: MatchType::Exact,
        }
    }

    /// Accepted by the synonym layer.
    pub fn synonym() -> Self {
        Self {
            is_match: true,
            confidence: 1.0,
            match_type: MatchType::Synonym,
        }
    }

    /// Accepted by the normalized layer.
    pub fn normalized(confidence: f64) -> Self {
        Self {
            is_match: true,
            confidence,
            match_type: MatchType::Normalized,
        }
    }

    /// Accepted by the fuzzy layer with the given similarity.
    pub fn fuzzy(similarity: f64) -> Self {
        Self {
            is_match: true,
            confidence: similarity,
            match_type: MatchType::Fuzzy,
        }
    }

    /// Rejected by every layer.
    pub fn no_match() -> Self {
        Self {
            is_match: false,
            confidence: 0.0,
            match_type: MatchType::None,
        }
    }
}
