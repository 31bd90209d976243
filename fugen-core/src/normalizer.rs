//! Suffix normalization of inflected trailing fragments

use crate::error::{CoreError, Result};
use crate::lexicon::Lexicon;

/// One rewrite of a trailing inflectional suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    /// The inflectional suffix to recognize
    pub suffix: String,
    /// What replaces it, empty for a plain strip
    pub replacement: String,
}

impl SuffixRule {
    /// Shorthand for building a rule from string literals
    pub fn new(suffix: &str, replacement: &str) -> Self {
        Self {
            suffix: suffix.to_string(),
            replacement: replacement.to_string(),
        }
    }

    fn apply(&self, fragment: &str) -> Option<String> {
        let stem = fragment.strip_suffix(self.suffix.as_str())?;
        if stem.is_empty() && self.replacement.is_empty() {
            return None;
        }
        let mut rewritten = String::with_capacity(stem.len() + self.replacement.len());
        rewritten.push_str(stem);
        rewritten.push_str(&self.replacement);
        Some(rewritten)
    }
}

/// Fixed ordered table of suffix rewrites
///
/// Maps an inflected fragment to a lexical stem: plural and genitive
/// markers are stripped ("kanzleien" → "kanzlei"), the verb ending "-et"
/// is rewritten to "-en" ("gekostet" → "gekosten"). Rules are tried in
/// table order and exactly one rewrite is applied per fragment, there is
/// no iterative re-normalization.
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Vec<SuffixRule>,
}

impl Normalizer {
    /// The standard German inflection table
    ///
    /// "-et" precedes "-e" so that verb forms rewrite before the generic
    /// "-e" strip gets a chance, and "-en"/"-es"/"-er" precede their
    /// single-letter tails for the same reason.
    pub fn german() -> Self {
        Self {
            rules: vec![
                SuffixRule::new("et", "en"),
                SuffixRule::new("en", ""),
                SuffixRule::new("es", ""),
                SuffixRule::new("er", ""),
                SuffixRule::new("e", ""),
                SuffixRule::new("n", ""),
                SuffixRule::new("s", ""),
            ],
        }
    }

    /// Build a normalizer from a custom rule table
    pub fn new(rules: Vec<SuffixRule>) -> Result<Self> {
        for (i, rule) in rules.iter().enumerate() {
            if rule.suffix.is_empty() {
                return Err(CoreError::EmptySuffixRule);
            }
            if rules[..i].iter().any(|r| r.suffix == rule.suffix) {
                return Err(CoreError::DuplicateEntry(
                    rule.suffix.clone(),
                    "suffix rule table",
                ));
            }
        }
        Ok(Self { rules })
    }

    /// A normalizer that never rewrites anything
    pub fn disabled() -> Self {
        Self { rules: Vec::new() }
    }

    /// All single-rewrite candidates for a fragment, in rule order
    pub fn rewrites<'a>(&'a self, fragment: &'a str) -> impl Iterator<Item = String> + 'a {
        self.rules.iter().filter_map(move |rule| {
            rule.apply(fragment)
                .filter(|rewritten| rewritten.as_str() != fragment)
        })
    }

    /// First rewrite the lexicon knows, if any
    ///
    /// The segmenter prefers this lexical form over the raw fragment when
    /// both would be acceptable.
    pub fn normalize(&self, fragment: &str, lexicon: &Lexicon) -> Option<String> {
        self.rewrites(fragment).find(|stem| lexicon.contains(stem))
    }

    /// Number of rules in the table
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the table holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::german()
    }
}
