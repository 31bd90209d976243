//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Engine configuration
    #[serde(default)]
    pub engine: EngineSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Engine-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct EngineSection {
    /// Path to the dictionary word list
    pub dictionary: Option<PathBuf>,

    /// Minimum subword length in characters
    pub min_subword_len: usize,

    /// Protected tokens, never decompounded
    pub keywords: Vec<String>,

    /// Whether protected tokens are honored
    pub respect_keywords: bool,

    /// Emit subwords without the original tokens
    pub subwords_only: bool,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            dictionary: None,
            min_subword_len: fugen_core::DEFAULT_MIN_SUBWORD_LEN,
            keywords: Vec::new(),
            respect_keywords: true,
            subwords_only: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputSection {
    /// Default output format name
    pub format: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

impl CliConfig {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| CliError::ConfigError(format!("cannot read {}", path.display())))?;
        let config: CliConfig = toml::from_str(&content)
            .with_context(|| CliError::ConfigError(format!("invalid TOML in {}", path.display())))?;
        Ok(config)
    }
}
