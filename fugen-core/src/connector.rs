//! Connecting letters (Fugenelemente) bridged between morphemes

use crate::error::{CoreError, Result};

/// Ordered set of candidate infix strings tried between two morphemes
///
/// The empty string stands for direct concatenation and is always tried
/// first. Ordering beyond that is a preference hint: the segmenter considers
/// every candidate that yields a valid split, so reordering never changes
/// whether a token decomposes, only which decomposition wins ties.
#[derive(Debug, Clone)]
pub struct ConnectorSet {
    infixes: Vec<String>,
}

impl ConnectorSet {
    /// The standard German linking elements
    pub fn german() -> Self {
        Self {
            infixes: ["", "s", "es", "e", "n", "en", "er", "ens"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Build a custom connector set
    ///
    /// The empty infix is prepended when missing. Duplicates are rejected.
    pub fn new<I, S>(infixes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut all: Vec<String> = vec![String::new()];
        for infix in infixes {
            let infix = infix.into();
            if all.contains(&infix) {
                if infix.is_empty() {
                    continue;
                }
                return Err(CoreError::DuplicateEntry(infix, "connector set"));
            }
            all.push(infix);
        }
        Ok(Self { infixes: all })
    }

    /// The candidates in trial order, empty infix first
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.infixes.iter().map(String::as_str)
    }

    /// Number of candidates, including the empty infix
    pub fn len(&self) -> usize {
        self.infixes.len()
    }

    /// True when no candidate exists, not constructible through this API
    pub fn is_empty(&self) -> bool {
        self.infixes.is_empty()
    }
}

impl Default for ConnectorSet {
    fn default() -> Self {
        Self::german()
    }
}
