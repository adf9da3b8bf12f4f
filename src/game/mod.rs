//! Room-based game flow around the matcher.
//!
//! A room holds a [`GameSession`] with the word being guessed and the ids of
//! every word already played. [`GameService`] exposes three handlers, each
//! taking a JSON-shaped request and returning a response or a [`GameError`]
//! with an HTTP-style status:
//!
//! - [`create_game`](GameService::create_game): `{ roomId, difficulty }` to `{ word, category }`
//! - [`next_round`](GameService::next_round): `{ roomId }` to `{ word, category }`
//! - [`check_guess`](GameService::check_guess): `{ roomId, guess }` to
//!   `{ isCorrect, confidence, pointsAwarded, matchType }`
//!
//! Transport is left to the embedding application.

mod api;
mod error;
mod service;
mod session;

pub use api::{
    points_awarded, CreateGameRequest, GuessRequest, GuessResponse, NextRoundRequest,
    RoundResponse,
};
pub use error::{ErrorBody, GameError, Result};
pub use service::GameService;
pub use session::{GameSession, SessionStore};
