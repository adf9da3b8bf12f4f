//! Target words and the word lists they are drawn from.
//!
//! Word lists are JSON files, one per difficulty tier:
//!
//! ```json
//! {
//!   "words": [
//!     { "id": "animal-001", "word": "기린", "synonyms": ["지라프"],
//!       "category": "동물", "difficulty": "easy" }
//!   ]
//! }
//! ```

mod bank;
mod entry;
mod error;

pub use bank::{
    ValidationIssue, ValidationReport, WordBank, WordStatistics, MIN_WORDS_PER_DIFFICULTY,
};
pub use entry::{Difficulty, WordEntry};
pub use error::{Result, WordBankError};
