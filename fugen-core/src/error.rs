//! Error types for engine construction

use thiserror::Error;

/// Errors reported while building a [`crate::Decompounder`]
///
/// The segmentation path itself is total: every token yields a well-defined
/// result, so no error variant exists for it. Everything here is a
/// construction-time concern.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The dictionary produced no usable entries
    #[error("lexicon is empty")]
    EmptyLexicon,

    /// Minimum subword length must be at least one character
    #[error("invalid minimum subword length {0}, must be >= 1")]
    InvalidMinSubwordLen(usize),

    /// The connector set was constructed without candidates
    #[error("connector set is empty, it must at least contain the empty infix")]
    EmptyConnectorSet,

    /// A connector or suffix rule appeared more than once
    #[error("duplicate entry '{0}' in {1}")]
    DuplicateEntry(String, &'static str),

    /// A suffix rewrite rule with an empty left-hand side
    #[error("suffix rule with empty suffix")]
    EmptySuffixRule,

    /// Dictionary file could not be read
    #[error("failed to read dictionary: {0}")]
    DictionaryIo(#[from] std::io::Error),
}

/// Result type for engine construction
pub type Result<T> = std::result::Result<T, CoreError>;
