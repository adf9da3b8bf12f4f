//! Per-room game state.

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::word_bank::{Difficulty, WordEntry};

/// State of one room's game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    /// Word players are currently guessing.
    pub current_word: WordEntry,
    /// Ids of every word played in this session, current one included.
    pub used_word_ids: FxHashSet<String>,
    /// Tier new words are drawn from.
    pub difficulty: Difficulty,
}

impl GameSession {
    /// Fresh session whose first word is `word`.
    pub fn new(word: WordEntry, difficulty: Difficulty) -> Self {
        let mut used_word_ids = FxHashSet::default();
        used_word_ids.insert(word.id.clone());
        Self {
            current_word: word,
            used_word_ids,
            difficulty,
        }
    }

    /// Make `word` the current one and mark it used.
    pub fn advance(&mut self, word: WordEntry) {
        self.used_word_ids.insert(word.id.clone());
        self.current_word = word;
    }

    /// Number of words played so far.
    pub fn rounds_played(&self) -> usize {
        self.used_word_ids.len()
    }
}

/// Sessions keyed by room id.
///
/// Shared by all handlers; readers never block each other. Values handed out
/// by [`get`](Self::get) are snapshots.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<FxHashMap<String, GameSession>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a room's session.
    pub fn get(&self, room_id: &str) -> Option<GameSession> {
        self.sessions.read().get(room_id).cloned()
    }

    /// Snapshot of the word a room is currently guessing.
    pub fn current_word(&self, room_id: &str) -> Option<WordEntry> {
        self.sessions
            .read()
            .get(room_id)
            .map(|session| session.current_word.clone())
    }

    /// Store a session for a room, returning the one it replaced.
    pub fn create(&self, room_id: impl Into<String>, session: GameSession) -> Option<GameSession> {
        self.sessions.write().insert(room_id.into(), session)
    }

    /// Run `f` on a room's session under the write lock.
    ///
    /// Returns `None` without calling `f` when the room has no session.
    pub fn update<T>(&self, room_id: &str, f: impl FnOnce(&mut GameSession) -> T) -> Option<T> {
        self.sessions.write().get_mut(room_id).map(f)
    }

    /// Remove a room's session.
    pub fn delete(&self, room_id: &str) -> Option<GameSession> {
        self.sessions.write().remove(room_id)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Returns true if no session is stored.
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
