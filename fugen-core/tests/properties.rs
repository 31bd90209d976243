//! Property-based checks of the engine invariants

use fugen_core::{Decompounder, DecompounderConfig, Lexicon, TokenKind};
use proptest::prelude::*;

const STEMS: &[&str] = &[
    "Jahr", "feier", "Recht", "anwalt", "kanzlei", "Donau", "dampf", "schiff", "Schlüssel",
    "wort", "haus", "tür",
];

const CONNECTORS: &[&str] = &["", "s", "es", "e", "n", "en"];

fn engine() -> Decompounder {
    let lexicon = Lexicon::from_words(STEMS.iter().copied()).unwrap();
    Decompounder::new(lexicon, DecompounderConfig::default()).unwrap()
}

proptest! {
    /// Every emitted subword honors the minimum length policy.
    #[test]
    fn subwords_respect_the_minimum_length(token in "\\PC{0,24}") {
        let engine = engine();
        for emitted in engine.expand(&token) {
            if emitted.kind == TokenKind::Subword {
                prop_assert!(emitted.text.chars().count() >= engine.config().min_subword_len);
            }
        }
    }

    /// Segmentation is pure: the same token always yields the same result.
    #[test]
    fn expansion_is_deterministic(token in "\\PC{0,24}") {
        let engine = engine();
        prop_assert_eq!(engine.expand(&token), engine.expand(&token));
        prop_assert_eq!(engine.decompound(&token), engine.decompound(&token));
    }

    /// The original token always opens the expansion, at increment one.
    #[test]
    fn original_token_comes_first(token in "\\PC{1,24}") {
        let engine = engine();
        let output = engine.expand(&token);
        prop_assert!(!output.is_empty());
        prop_assert_eq!(output[0].kind, TokenKind::Original);
        prop_assert_eq!(output[0].text.as_str(), token.as_str());
        prop_assert_eq!(output[0].position_increment, 1);
        for emitted in &output[1..] {
            prop_assert_eq!(emitted.position_increment, 0);
        }
    }

    /// A compound assembled from known stems and connectors always splits,
    /// into lexicon entries only, appearing left to right.
    #[test]
    fn assembled_compounds_decompose(
        first in prop::sample::select(STEMS),
        glue in prop::sample::select(CONNECTORS),
        second in prop::sample::select(STEMS),
    ) {
        let engine = engine();
        let compound = format!("{first}{glue}{second}");
        let parts = engine.decompound(&compound);

        prop_assert!(parts.len() >= 2, "no split for {compound}: {parts:?}");
        for part in &parts {
            prop_assert!(engine.lexicon().contains(part), "'{part}' not in lexicon");
        }
        // Left-to-right order: each part starts at or after the previous one.
        prop_assert!(compound.starts_with(parts[0].as_str()));
        let mut search_from = 0;
        for part in &parts[..parts.len() - 1] {
            let found = compound[search_from..]
                .find(part.as_str())
                .expect("non-final part must occur verbatim");
            search_from += found + part.len();
        }
    }

    /// Protection wins over any possible decomposition.
    #[test]
    fn protected_tokens_never_split(
        first in prop::sample::select(STEMS),
        second in prop::sample::select(STEMS),
    ) {
        let compound = format!("{first}{second}");
        let lexicon = Lexicon::from_words(STEMS.iter().copied()).unwrap();
        let config = DecompounderConfig::builder()
            .keywords([compound.clone()])
            .build()
            .unwrap();
        let engine = Decompounder::new(lexicon, config).unwrap();

        let output = engine.expand(&compound);
        prop_assert_eq!(output.len(), 1);
        prop_assert_eq!(output[0].text.as_str(), compound.as_str());
    }
}
