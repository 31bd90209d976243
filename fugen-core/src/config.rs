//! Engine configuration and its builder

use crate::connector::ConnectorSet;
use crate::error::{CoreError, Result};
use crate::normalizer::Normalizer;
use std::collections::HashSet;

/// Default minimum subword length in characters
///
/// Keeps single letters out of the output; two-letter fragments surface
/// only when the dictionary actually lists them.
pub const DEFAULT_MIN_SUBWORD_LEN: usize = 2;

/// Configuration consumed by [`crate::Decompounder::new`]
///
/// Fixed at construction; the engine is read-only afterwards.
#[derive(Debug, Clone)]
pub struct DecompounderConfig {
    /// Minimum accepted subword length, in characters
    pub min_subword_len: usize,
    /// Infix candidates bridged between morphemes
    pub connectors: ConnectorSet,
    /// Suffix rewrite table for trailing fragments
    pub normalizer: Normalizer,
    /// Literal tokens protected from decompounding
    pub keywords: HashSet<String>,
    /// Whether the keyword protection is honored at all
    pub respect_keywords: bool,
    /// Suppress original tokens and emit the decomposition alone
    pub subwords_only: bool,
}

impl Default for DecompounderConfig {
    fn default() -> Self {
        Self {
            min_subword_len: DEFAULT_MIN_SUBWORD_LEN,
            connectors: ConnectorSet::german(),
            normalizer: Normalizer::german(),
            keywords: HashSet::new(),
            respect_keywords: true,
            subwords_only: false,
        }
    }
}

impl DecompounderConfig {
    /// Start building a configuration
    pub fn builder() -> DecompounderConfigBuilder {
        DecompounderConfigBuilder::new()
    }

    /// Check the construction-time invariants
    pub fn validate(&self) -> Result<()> {
        if self.min_subword_len < 1 {
            return Err(CoreError::InvalidMinSubwordLen(self.min_subword_len));
        }
        if self.connectors.is_empty() {
            return Err(CoreError::EmptyConnectorSet);
        }
        Ok(())
    }
}

/// Fluent builder for [`DecompounderConfig`]
#[derive(Debug, Clone, Default)]
pub struct DecompounderConfigBuilder {
    config: DecompounderConfig,
}

impl DecompounderConfigBuilder {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self {
            config: DecompounderConfig::default(),
        }
    }

    /// Set the minimum subword length in characters
    pub fn min_subword_len(mut self, len: usize) -> Self {
        self.config.min_subword_len = len;
        self
    }

    /// Replace the connector set
    pub fn connectors(mut self, connectors: ConnectorSet) -> Self {
        self.config.connectors = connectors;
        self
    }

    /// Replace the suffix rewrite table
    pub fn normalizer(mut self, normalizer: Normalizer) -> Self {
        self.config.normalizer = normalizer;
        self
    }

    /// Set the protected token set
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Honor or ignore the protected token set
    pub fn respect_keywords(mut self, respect: bool) -> Self {
        self.config.respect_keywords = respect;
        self
    }

    /// Emit subwords without the original tokens
    pub fn subwords_only(mut self, subwords_only: bool) -> Self {
        self.config.subwords_only = subwords_only;
        self
    }

    /// Validate and produce the configuration
    pub fn build(self) -> Result<DecompounderConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
