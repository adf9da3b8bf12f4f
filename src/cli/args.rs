//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jamo-match")]
#[command(about = "Korean guess validation with jamo-level fuzzy matching")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a guess against a target word
    Match {
        /// The guessed text
        guess: String,

        /// Canonical target word
        target: String,

        /// Accepted synonyms (comma separated or repeated)
        #[arg(short, long, value_delimiter = ',')]
        synonyms: Vec<String>,

        /// Fuzzy acceptance threshold in [0, 1]
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the jamo-level similarity of two strings
    Similarity {
        /// First string
        first: String,

        /// Second string
        second: String,
    },

    /// Split Hangul text into basic jamo
    Decompose {
        /// Text to split
        text: String,

        /// Keep one group per input character
        #[arg(short, long)]
        grouped: bool,
    },

    /// Assemble a jamo sequence into syllables
    Compose {
        /// Jamo to assemble (e.g. "ㄱㅣㄹㅣㄴ")
        jamo: String,
    },

    /// Show word bank statistics
    Words {
        /// Directory holding easy.json, medium.json and hard.json
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Report structural problems and fail if any are found
        #[arg(long)]
        validate: bool,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a guess against a word bank entry
    Check {
        /// Entry id (e.g. "animal-001")
        id: String,

        /// The guessed text
        guess: String,

        /// Word bank directory
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Fuzzy acceptance threshold in [0, 1]
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or update user settings
    Settings {
        /// Set default fuzzy threshold
        #[arg(long)]
        set_threshold: Option<f64>,

        /// Set confidence reported for whitespace/case-insensitive matches
        #[arg(long)]
        set_normalized_confidence: Option<f64>,

        /// Set default word bank directory
        #[arg(long)]
        set_word_bank: Option<PathBuf>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
