//! Handlers for the create / next-round / guess flow.

use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::matcher::{GuessMatcher, PhoneticMatcher};
use crate::word_bank::WordBank;

use super::api::{
    required, CreateGameRequest, GuessRequest, GuessResponse, NextRoundRequest, RoundResponse,
};
use super::error::{GameError, Result};
use super::session::{GameSession, SessionStore};

/// Game rooms backed by a word bank and a guess matcher.
///
/// Every handler takes `&self`, so a service can sit behind an `Arc` and
/// serve many rooms concurrently. Randomness is injected by the caller.
///
/// # Example
///
/// ```rust
/// use jamo_match::game::{CreateGameRequest, GameService, GuessRequest};
/// use jamo_match::matcher::MatchType;
/// use jamo_match::word_bank::{Difficulty, WordBank, WordEntry};
/// use rand::SeedableRng;
///
/// let bank = WordBank::from_entries([WordEntry::new("a2", "기린")
///     .with_category("동물")
///     .with_difficulty(Difficulty::Easy)]);
/// let service = GameService::new(bank);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
///
/// let round = service
///     .create_game(&CreateGameRequest::new("room-1", Difficulty::Easy), &mut rng)
///     .unwrap();
/// assert_eq!(round.category, "동물");
///
/// let verdict = service.check_guess(&GuessRequest::new("room-1", "기 린")).unwrap();
/// assert!(verdict.is_correct);
/// assert_eq!(verdict.match_type, MatchType::Normalized);
/// assert_eq!(verdict.points_awarded, 95);
/// ```
#[derive(Debug)]
pub struct GameService<M = PhoneticMatcher> {
    bank: WordBank,
    store: SessionStore,
    matcher: M,
}

impl GameService<PhoneticMatcher> {
    /// Service using the default [`PhoneticMatcher`].
    pub fn new(bank: WordBank) -> Self {
        Self::with_matcher(bank, PhoneticMatcher::new())
    }
}

impl<M: GuessMatcher> GameService<M> {
    /// Service using a custom matcher.
    pub fn with_matcher(bank: WordBank, matcher: M) -> Self {
        Self {
            bank,
            store: SessionStore::new(),
            matcher,
        }
    }

    /// The word bank rounds are drawn from.
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Live sessions.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// The matcher used for guesses.
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Start a game: draw a word of the requested tier and store a fresh
    /// session for the room, replacing any previous one.
    pub fn create_game<R: Rng + ?Sized>(
        &self,
        request: &CreateGameRequest,
        rng: &mut R,
    ) -> Result<RoundResponse> {
        let room_id = required(&request.room_id).ok_or(GameError::MissingRoomId)?;
        let difficulty = request.difficulty;

        let word = self
            .bank
            .random_word(difficulty, &FxHashSet::default(), rng)
            .ok_or(GameError::NoWordsAvailable(difficulty))?
            .clone();
        let response = RoundResponse::from(&word);

        let replaced = self
            .store
            .create(room_id, GameSession::new(word, difficulty));
        info!(
            room_id,
            %difficulty,
            replaced = replaced.is_some(),
            "Game created"
        );

        Ok(response)
    }

    /// Move a room on to a word it has not played yet.
    pub fn next_round<R: Rng + ?Sized>(
        &self,
        request: &NextRoundRequest,
        rng: &mut R,
    ) -> Result<RoundResponse> {
        let room_id = required(&request.room_id).ok_or(GameError::MissingRoomId)?;

        self.store
            .update(room_id, |session| {
                let word = self
                    .bank
                    .random_word(session.difficulty, &session.used_word_ids, rng)
                    .ok_or(GameError::NoMoreWords)?
                    .clone();
                let response = RoundResponse::from(&word);
                session.advance(word);
                info!(
                    room_id,
                    round = session.rounds_played(),
                    "Next round"
                );
                Ok(response)
            })
            .ok_or(GameError::SessionNotFound)?
    }

    /// Judge a guess against the room's current word.
    pub fn check_guess(&self, request: &GuessRequest) -> Result<GuessResponse> {
        let (room_id, guess) = match (required(&request.room_id), required(&request.guess)) {
            (Some(room_id), Some(guess)) => (room_id, guess),
            _ => return Err(GameError::MissingGuessFields),
        };

        let target = self
            .store
            .current_word(room_id)
            .ok_or(GameError::SessionNotFound)?;

        let response = GuessResponse::from(self.matcher.match_guess(guess, &target));
        debug!(
            room_id,
            correct = response.is_correct,
            match_type = %response.match_type,
            points = response.points_awarded,
            "Guess checked"
        );

        Ok(response)
    }
}
