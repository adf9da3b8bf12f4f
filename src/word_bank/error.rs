//! Error types for word-bank loading.

use std::path::PathBuf;

use thiserror::Error;

use super::Difficulty;

/// Errors that can occur while loading word lists.
#[derive(Debug, Error)]
pub enum WordBankError {
    /// A word-list file could not be read.
    #[error("Failed to read word list {}: {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A word list is not valid JSON of the expected shape.
    #[error("Failed to parse {difficulty} word list: {source}")]
    Parse {
        /// Tier the list was loaded for.
        difficulty: Difficulty,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// A specialized `Result` type for word-bank operations.
pub type Result<T> = std::result::Result<T, WordBankError>;
