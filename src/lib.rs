//! # jamo-match
//!
//! Guess validation for Korean word-guessing games.
//!
//! A player's free-text guess is compared with a target word and its
//! synonyms through four layers: exact, synonym, whitespace/case-normalized,
//! and finally a fuzzy comparison on the jamo (alphabetic letters) that make
//! up each Hangul syllable. Working on jamo means a single misspelled vowel
//! costs one edit instead of a whole syllable.
//!
//! ## Example
//!
//! ```rust
//! use jamo_match::prelude::*;
//!
//! let tiger = WordEntry::new("animal-003", "호랑이").with_synonyms(["범"]);
//! let matcher = PhoneticMatcher::new();
//!
//! let result = matcher.match_guess("호랭이", &tiger);
//! assert!(result.is_match);
//! assert_eq!(result.match_type, MatchType::Fuzzy);
//!
//! let result = matcher.match_guess("Horangi", &tiger);
//! assert_eq!(result.match_type, MatchType::None);
//! ```
//!
//! ## Modules
//!
//! - [`hangul`]: syllable decomposition and reassembly
//! - [`distance`]: Levenshtein distance over arbitrary symbol sequences
//! - [`matcher`]: the layered guess matcher
//! - [`word_bank`]: word lists per difficulty tier
//! - [`game`]: room sessions and request handlers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod distance;
pub mod game;
pub mod hangul;
pub mod matcher;
pub mod word_bank;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::config::MatcherConfig;
    pub use crate::game::{
        points_awarded, CreateGameRequest, GameError, GameService, GuessRequest, GuessResponse,
        NextRoundRequest, RoundResponse,
    };
    pub use crate::hangul::{assemble, disassemble};
    pub use crate::matcher::{
        match_guess, similarity, GuessMatcher, MatchResult, MatchType, PhoneticMatcher,
    };
    pub use crate::word_bank::{Difficulty, WordBank, WordEntry};
}
