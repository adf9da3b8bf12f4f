//! Default paths and persistent configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::MatcherConfig;

/// Get the configuration directory for jamo-match
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("jamo-match"))
}

/// Word bank directory used when neither the CLI nor the config names one
pub fn default_word_bank_dir() -> Result<PathBuf> {
    Ok(config_dir()?.join("words"))
}

/// Get the default config file path
pub fn config_file_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    Ok(dir.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = custom_path {
        validate_config_path(&path)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        Ok(path)
    } else {
        config_file_path()
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistentConfig {
    /// Matching policy (defaults apply if not set)
    #[serde(default)]
    pub matcher: Option<MatcherConfig>,
    /// Default word bank directory
    #[serde(default)]
    pub word_bank_dir: Option<PathBuf>,
}

impl PersistentConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from custom path
    pub fn load_from(custom_path: Option<PathBuf>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        if let Some(matcher) = &config.matcher {
            matcher
                .validate()
                .with_context(|| format!("Invalid matcher settings in {}", path.display()))?;
        }
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(None)
    }

    /// Save configuration to custom path
    pub fn save_to(&self, custom_path: Option<PathBuf>) -> Result<()> {
        let path = config_file_path_with_override(custom_path)?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Matching policy with defaults filled in
    pub fn matcher_config(&self) -> MatcherConfig {
        self.matcher.unwrap_or_default()
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(
        &self,
        fuzzy_threshold: Option<f64>,
        word_bank_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            matcher: match fuzzy_threshold {
                Some(threshold) => Some(self.matcher_config().with_fuzzy_threshold(threshold)),
                None => self.matcher,
            },
            word_bank_dir: word_bank_dir.or_else(|| self.word_bank_dir.clone()),
        }
    }

    /// Word bank directory, falling back to the default location
    pub fn resolve_word_bank_dir(&self) -> Result<PathBuf> {
        match &self.word_bank_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_word_bank_dir(),
        }
    }
}
