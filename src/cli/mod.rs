//! CLI interface for jamo-match
//!
//! Provides command-line utilities for matching guesses, inspecting jamo and
//! managing word banks.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands};
pub use paths::{config_dir, PersistentConfig};
