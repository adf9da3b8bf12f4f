//! Tunable matching policy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum jamo similarity for a fuzzy match.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.85;

/// Confidence reported for a whitespace/case-insensitive match.
pub const DEFAULT_NORMALIZED_CONFIDENCE: f64 = 0.95;

/// Errors raised when validating a [`MatcherConfig`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The fuzzy threshold is not a number in `[0, 1]`.
    #[error("Fuzzy threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    /// The normalized-match confidence is not a number in `[0, 1]`.
    #[error("Normalized confidence must be within [0, 1], got {0}")]
    InvalidConfidence(f64),
}

/// A specialized `Result` type for configuration validation.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Policy constants used by [`PhoneticMatcher`](crate::matcher::PhoneticMatcher).
///
/// # Example
///
/// ```rust
/// use jamo_match::config::MatcherConfig;
///
/// let config = MatcherConfig::default().with_fuzzy_threshold(0.8);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.normalized_confidence, 0.95);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatcherConfig {
    /// Similarity at or above which a fuzzy comparison counts as correct.
    pub fuzzy_threshold: f64,
    /// Confidence reported by the normalized layer.
    pub normalized_confidence: f64,
}

impl MatcherConfig {
    /// Replace the fuzzy threshold.
    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    /// Replace the normalized-match confidence.
    pub fn with_normalized_confidence(mut self, confidence: f64) -> Self {
        self.normalized_confidence = confidence;
        self
    }

    /// Check that both values are finite and within `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(ConfigError::InvalidThreshold(self.fuzzy_threshold));
        }
        if !(0.0..=1.0).contains(&self.normalized_confidence) {
            return Err(ConfigError::InvalidConfidence(self.normalized_confidence));
        }
        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            normalized_confidence: DEFAULT_NORMALIZED_CONFIDENCE,
        }
    }
}
