//! Request and response bodies for the game handlers.
//!
//! Field names follow the JSON wire format (`roomId`, `isCorrect`, ...).
//! Required request fields are optional here so that a missing field becomes
//! a [`GameError`](super::GameError) rather than a deserialization failure.

use serde::{Deserialize, Serialize};

use crate::matcher::{MatchResult, MatchType};
use crate::word_bank::{Difficulty, WordEntry};

/// Points for a verdict: `ceil(100 * confidence)` when correct, else 0.
///
/// ```rust
/// use jamo_match::game::points_awarded;
/// use jamo_match::matcher::MatchResult;
///
/// assert_eq!(points_awarded(&MatchResult::exact()), 100);
/// assert_eq!(points_awarded(&MatchResult::normalized(0.95)), 95);
/// assert_eq!(points_awarded(&MatchResult::fuzzy(6.0 / 7.0)), 86);
/// assert_eq!(points_awarded(&MatchResult::no_match()), 0);
/// ```
pub fn points_awarded(result: &MatchResult) -> u32 {
    if !result.is_match {
        return 0;
    }
    (result.confidence * 100.0).ceil().clamp(0.0, 100.0) as u32
}

/// Non-empty value of a required text field.
pub(crate) fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// A player's guess for the current round of a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    /// Room the guess is for.
    #[serde(default)]
    pub room_id: Option<String>,
    /// The guessed text.
    #[serde(default)]
    pub guess: Option<String>,
}

impl GuessRequest {
    /// Request with both fields set.
    pub fn new(room_id: impl Into<String>, guess: impl Into<String>) -> Self {
        Self {
            room_id: Some(room_id.into()),
            guess: Some(guess.into()),
        }
    }
}

/// Verdict returned for a guess.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    /// Whether the guess was accepted.
    pub is_correct: bool,
    /// Matcher confidence in `[0, 1]`.
    pub confidence: f64,
    /// Points earned, see [`points_awarded`].
    pub points_awarded: u32,
    /// Layer that produced the verdict.
    pub match_type: MatchType,
}

impl From<MatchResult> for GuessResponse {
    fn from(result: MatchResult) -> Self {
        Self {
            is_correct: result.is_match,
            confidence: result.confidence,
            points_awarded: points_awarded(&result),
            match_type: result.match_type,
        }
    }
}

/// Start a new game in a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    /// Room to create the session for.
    #[serde(default)]
    pub room_id: Option<String>,
    /// Tier to draw words from, `medium` when omitted.
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl CreateGameRequest {
    /// Request for a room and tier.
    pub fn new(room_id: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            room_id: Some(room_id.into()),
            difficulty,
        }
    }
}

/// Advance a room to its next word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRoundRequest {
    /// Room to advance.
    #[serde(default)]
    pub room_id: Option<String>,
}

impl NextRoundRequest {
    /// Request for a room.
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            room_id: Some(room_id.into()),
        }
    }
}

/// The word drawn for a round, as shown to the drawing player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResponse {
    /// Word to draw.
    pub word: String,
    /// Its category.
    pub category: String,
}

impl From<&WordEntry> for RoundResponse {
    fn from(entry: &WordEntry) -> Self {
        Self {
            word: entry.word.clone(),
            category: entry.category.clone(),
        }
    }
}
