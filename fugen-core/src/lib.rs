//! Dictionary-based decomposition of German compound words
//!
//! Splits a compound token into its constituent morphemes so that a search
//! index can match on the components as well as the whole word:
//! "Donaudampfschiff" expands to "Donau", "dampf", "schiff". The engine
//! strips connecting letters (Fugenelemente) between morphemes and rewrites
//! inflectional suffixes on the trailing fragment back to lexical stems.
//!
//! # Architecture
//!
//! - **Lexicon**: immutable morpheme dictionary with exact lookup
//! - **ConnectorSet**: ordered infix candidates tried between morphemes
//! - **Segmenter**: memoized recursive split search, shortest-first
//! - **Normalizer**: fixed suffix rewrite table for trailing fragments
//! - **Emitter**: assembles the expanded token stream with positions
//!
//! # Example
//!
//! ```rust
//! use fugen_core::{Decompounder, DecompounderConfig, Lexicon};
//!
//! let lexicon = Lexicon::from_words(["Jahr", "feier"]).unwrap();
//! let engine = Decompounder::new(lexicon, DecompounderConfig::default()).unwrap();
//!
//! assert_eq!(engine.decompound("Jahresfeier"), ["Jahr", "feier"]);
//!
//! // Tokens the dictionary cannot account for pass through unsplit.
//! assert_eq!(engine.decompound("Bärlauch"), ["Bärlauch"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod connector;
pub mod decompounder;
pub mod emitter;
pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod segmenter;

pub use config::{DecompounderConfig, DecompounderConfigBuilder, DEFAULT_MIN_SUBWORD_LEN};
pub use connector::ConnectorSet;
pub use decompounder::Decompounder;
pub use emitter::{Emitter, ExpandedToken, TokenKind};
pub use error::{CoreError, Result};
pub use lexicon::Lexicon;
pub use normalizer::{Normalizer, SuffixRule};
pub use segmenter::Segmenter;
