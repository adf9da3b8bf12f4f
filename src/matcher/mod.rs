//! Guess validation for Korean word-guessing games.
//!
//! A guess is compared with a [`WordEntry`] through four layers, and the
//! first one that accepts wins:
//!
//! | Layer        | Accepts when                                     | Confidence     |
//! |--------------|--------------------------------------------------|----------------|
//! | `exact`      | guess == word                                    | 1.0            |
//! | `synonym`    | guess == some synonym                            | 1.0            |
//! | `normalized` | equal after dropping whitespace and lowercasing  | 0.95           |
//! | `fuzzy`      | jamo similarity >= 0.85                          | the similarity |
//!
//! Fuzzy comparison works on jamo rather than syllables, so that a single
//! misspelled vowel inside a syllable costs one edit instead of a whole
//! syllable.
//!
//! ```rust
//! use jamo_match::matcher::{match_guess, MatchType};
//! use jamo_match::word_bank::WordEntry;
//!
//! let giraffe = WordEntry::new("animal-001", "기린").with_synonyms(["지라프"]);
//!
//! let result = match_guess("지라프", &giraffe);
//! assert!(result.is_match);
//! assert_eq!(result.match_type, MatchType::Synonym);
//!
//! // One vowel off in a five-jamo word is too far.
//! assert!(!match_guess("그린", &giraffe).is_match);
//! ```

mod phonetic;
mod result;

pub use phonetic::{similarity, PhoneticMatcher};
pub use result::{MatchResult, MatchType};

use crate::word_bank::WordEntry;

/// Something that can judge a guess against a target word.
///
/// [`GameService`](crate::game::GameService) is generic over this trait so
/// alternative policies can be plugged in.
pub trait GuessMatcher: Send + Sync {
    /// Judge `guess` against `target`. Must not mutate anything.
    fn match_guess(&self, guess: &str, target: &WordEntry) -> MatchResult;
}

impl<M: GuessMatcher + ?Sized> GuessMatcher for &M {
    fn match_guess(&self, guess: &str, target: &WordEntry) -> MatchResult {
        (**self).match_guess(guess, target)
    }
}

/// Match a guess with the default [`PhoneticMatcher`].
pub fn match_guess(guess: &str, target: &WordEntry) -> MatchResult {
    PhoneticMatcher::new().match_guess(guess, target)
}
