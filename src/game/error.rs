//! Error types for game-session operations.

use serde::Serialize;
use thiserror::Error;

use crate::word_bank::Difficulty;

/// Errors returned by [`GameService`](super::GameService) handlers.
///
/// Each variant maps onto an HTTP-style status via
/// [`status_code`](Self::status_code).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A guess request without a room id or without a guess.
    #[error("Room ID and guess are required")]
    MissingGuessFields,

    /// A create or next-round request without a room id.
    #[error("Room ID is required")]
    MissingRoomId,

    /// No session is stored for the room.
    #[error("Game session not found")]
    SessionNotFound,

    /// The tier requested for a new game holds no words.
    #[error("No words available for this difficulty")]
    NoWordsAvailable(Difficulty),

    /// Every word of the session's tier has already been played.
    #[error("No more words available")]
    NoMoreWords,
}

impl GameError {
    /// HTTP-style status for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            GameError::MissingGuessFields | GameError::MissingRoomId => 400,
            GameError::SessionNotFound => 404,
            GameError::NoWordsAvailable(_) | GameError::NoMoreWords => 500,
        }
    }

    /// Body sent back to the client.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

/// Wire shape of an error response: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

/// A specialized `Result` type for game-session operations.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(GameError::MissingGuessFields.status_code(), 400);
        assert_eq!(GameError::MissingRoomId.status_code(), 400);
        assert_eq!(GameError::SessionNotFound.status_code(), 404);
        assert_eq!(
            GameError::NoWordsAvailable(Difficulty::Hard).status_code(),
            500
        );
        assert_eq!(GameError::NoMoreWords.status_code(), 500);
    }

    #[test]
    fn test_error_body() {
        let body = serde_json::to_value(GameError::SessionNotFound.to_body()).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Game session not found" }));
    }
}
