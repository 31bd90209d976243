//! Engine facade tying lexicon, segmenter, and emitter together

use crate::config::DecompounderConfig;
use crate::emitter::{Emitter, ExpandedToken};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::segmenter::Segmenter;
use std::path::Path;

/// The decompounding engine
///
/// Read-only after construction: the lexicon, connector set, and rewrite
/// table are immutable and shared, so one engine serves any number of
/// concurrent callers without locking. Segmentation is a pure in-memory
/// computation with no failure state visible to callers.
#[derive(Debug)]
pub struct Decompounder {
    lexicon: Lexicon,
    config: DecompounderConfig,
    emitter: Emitter,
}

impl Decompounder {
    /// Build an engine from a materialized lexicon and configuration
    ///
    /// Invariants (minimum length >= 1, non-empty lexicon and connector
    /// set) are checked here, never mid-segmentation.
    pub fn new(lexicon: Lexicon, config: DecompounderConfig) -> Result<Self> {
        config.validate()?;
        let emitter = Emitter::new(config.min_subword_len, config.subwords_only);
        Ok(Self {
            lexicon,
            config,
            emitter,
        })
    }

    /// Build an engine from a dictionary file with the default configuration
    pub fn with_dictionary<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(Lexicon::from_file(path)?, DecompounderConfig::default())
    }

    /// Decompose a token into its constituent subwords
    ///
    /// Returns at least one element: a genuine split yields two or more
    /// parts, a whole-token suffix rewrite yields its stem, and a token the
    /// dictionary cannot account for comes back unchanged as the single
    /// part. Keyword protection is not applied here; this is the raw
    /// segmentation result.
    pub fn decompound(&self, token: &str) -> Vec<String> {
        let segmenter = Segmenter::new(
            &self.lexicon,
            &self.config.connectors,
            &self.config.normalizer,
            self.config.min_subword_len,
        );
        match segmenter.segment(token) {
            Some(parts) if parts.len() >= 2 || parts[0] != token => parts,
            _ => vec![token.to_string()],
        }
    }

    /// Expand a token into the output stream, honoring configured keywords
    pub fn expand(&self, token: &str) -> Vec<ExpandedToken> {
        self.expand_with(token, |t| self.is_protected(t))
    }

    /// Expand a token with an explicit protection predicate
    ///
    /// The predicate replaces the configured keyword gate for this call;
    /// callers that own the keyword exception state pass it in here.
    pub fn expand_with<F>(&self, token: &str, is_protected: F) -> Vec<ExpandedToken>
    where
        F: Fn(&str) -> bool,
    {
        if is_protected(token) {
            return self.emitter.emit(token, &[]);
        }
        let decomposition = self.decompound(token);
        self.emitter.emit(token, &decomposition)
    }

    /// Expand every whitespace-separated token of a text in order
    ///
    /// A convenience for hosts without their own tokenizer; anything more
    /// elaborate than whitespace splitting belongs to the caller.
    pub fn expand_text(&self, text: &str) -> Vec<ExpandedToken> {
        text.split_whitespace()
            .flat_map(|token| self.expand(token))
            .collect()
    }

    /// Whether the configured keyword gate protects this token
    pub fn is_protected(&self, token: &str) -> bool {
        self.config.respect_keywords && self.config.keywords.contains(token)
    }

    /// The engine configuration
    pub fn config(&self) -> &DecompounderConfig {
        &self.config
    }

    /// The morpheme dictionary
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Decompounder {
        let lexicon = Lexicon::from_words([
            "Jahr", "feier", "Recht", "anwalt", "kanzlei", "Schlüssel", "wort", "gekosten",
        ])
        .unwrap();
        Decompounder::new(lexicon, DecompounderConfig::default()).unwrap()
    }

    fn texts(tokens: &[ExpandedToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn decompound_splits_compounds() {
        assert_eq!(engine().decompound("Jahresfeier"), ["Jahr", "feier"]);
    }

    #[test]
    fn decompound_falls_back_to_the_token() {
        assert_eq!(engine().decompound("Ökosteuer"), ["Ökosteuer"]);
        assert_eq!(engine().decompound(""), [""]);
    }

    #[test]
    fn decompound_rewrites_whole_tokens() {
        assert_eq!(engine().decompound("gekostet"), ["gekosten"]);
    }

    #[test]
    fn expand_appends_subwords() {
        assert_eq!(
            texts(&engine().expand("Jahresfeier")),
            ["Jahresfeier", "Jahr", "feier"]
        );
    }

    #[test]
    fn expand_doubles_unsplit_tokens() {
        assert_eq!(texts(&engine().expand("viel")), ["viel", "viel"]);
    }

    #[test]
    fn keyword_gate_respects_configured_keywords() {
        let lexicon = Lexicon::from_words(["Schlüssel", "wort"]).unwrap();
        let config = DecompounderConfig::builder()
            .keywords(["Schlüsselwort"])
            .build()
            .unwrap();
        let engine = Decompounder::new(lexicon, config).unwrap();
        assert_eq!(texts(&engine.expand("Schlüsselwort")), ["Schlüsselwort"]);
    }

    #[test]
    fn keyword_gate_can_be_disabled() {
        let lexicon = Lexicon::from_words(["Schlüssel", "wort"]).unwrap();
        let config = DecompounderConfig::builder()
            .keywords(["Schlüsselwort"])
            .respect_keywords(false)
            .build()
            .unwrap();
        let engine = Decompounder::new(lexicon, config).unwrap();
        assert_eq!(
            texts(&engine.expand("Schlüsselwort")),
            ["Schlüsselwort", "Schlüssel", "wort"]
        );
    }

    #[test]
    fn explicit_predicate_overrides_the_gate() {
        let engine = engine();
        assert_eq!(texts(&engine.expand_with("Jahresfeier", |_| true)), ["Jahresfeier"]);
        assert_eq!(
            texts(&engine.expand_with("Jahresfeier", |_| false)),
            ["Jahresfeier", "Jahr", "feier"]
        );
    }

    #[test]
    fn expand_text_walks_the_stream() {
        let output = engine().expand_text("die Jahresfeier");
        assert_eq!(texts(&output), ["die", "die", "Jahresfeier", "Jahr", "feier"]);
        assert_eq!(output[0].position_increment, 1);
        assert_eq!(output[2].position_increment, 1);
        assert_eq!(output[3].position_increment, 0);
    }
}
