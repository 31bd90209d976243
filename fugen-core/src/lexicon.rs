//! Morpheme dictionary with exact, case-sensitive lookup

use crate::error::{CoreError, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Immutable set of known morphemes
///
/// Lookup is exact and case-sensitive: German nouns are stored capitalized,
/// verbs and inner fragments lower-case, so the dictionary carries the form
/// that is actually expected to match. The set is loaded once at engine
/// construction and shared read-only by all segmentation calls.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from an iterator of words
    ///
    /// Duplicates are idempotent. Fails if no non-empty word remains.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(CoreError::EmptyLexicon);
        }

        Ok(Self { words })
    }

    /// Read a flat word list, one entry per line
    ///
    /// Blank lines and lines starting with `#` are skipped; surrounding
    /// whitespace is trimmed.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            words.insert(entry.to_string());
        }

        if words.is_empty() {
            return Err(CoreError::EmptyLexicon);
        }

        Ok(Self { words })
    }

    /// Read a word list file from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Exact membership test, O(1) amortized
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the lexicon holds no entries
    ///
    /// Cannot be observed through the constructors, which reject empty input.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
