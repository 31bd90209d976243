//! Recursive decomposition of compounds into dictionary morphemes

use crate::connector::ConnectorSet;
use crate::lexicon::Lexicon;
use crate::normalizer::Normalizer;
use std::collections::HashMap;

/// Finds a decomposition of a token into known morphemes
///
/// The search runs left to right with backtracking: split points are
/// scanned in increasing order so the shortest valid first morpheme wins,
/// which yields the finer-grained splits ("Recht" + "anwalt" + "kanzlei"
/// rather than one long first match). The first fully successful split is
/// accepted, there is no search for a globally better one.
///
/// Results per remaining suffix are memoized for the duration of one call,
/// bounding the work to a polynomial in token length. The segmenter borrows
/// its collaborators and holds no state of its own, so calls are reentrant.
pub struct Segmenter<'a> {
    lexicon: &'a Lexicon,
    connectors: &'a ConnectorSet,
    normalizer: &'a Normalizer,
    min_subword_len: usize,
}

/// Memo of suffix start offset to its segmentation outcome
type Memo = HashMap<usize, Option<Vec<String>>>;

impl<'a> Segmenter<'a> {
    /// Borrow the engine pieces for one or more segmentation calls
    ///
    /// Invariants (min length >= 1, non-empty lexicon) are enforced by the
    /// engine constructor before a segmenter can exist.
    pub fn new(
        lexicon: &'a Lexicon,
        connectors: &'a ConnectorSet,
        normalizer: &'a Normalizer,
        min_subword_len: usize,
    ) -> Self {
        Self {
            lexicon,
            connectors,
            normalizer,
            min_subword_len,
        }
    }

    /// Decompose a token into morpheme subwords
    ///
    /// `None` means no path through the dictionary accepts the token at
    /// all. A single-element result is a whole-token match or rewrite, a
    /// longer one is a genuine compound split.
    pub fn segment(&self, token: &str) -> Option<Vec<String>> {
        if token.is_empty() {
            return None;
        }
        let mut memo = Memo::new();
        self.segment_suffix(token, 0, &mut memo)
    }

    fn segment_suffix(&self, token: &str, start: usize, memo: &mut Memo) -> Option<Vec<String>> {
        if let Some(cached) = memo.get(&start) {
            return cached.clone();
        }
        let result = self.segment_suffix_uncached(token, start, memo);
        memo.insert(start, result.clone());
        result
    }

    fn segment_suffix_uncached(
        &self,
        token: &str,
        start: usize,
        memo: &mut Memo,
    ) -> Option<Vec<String>> {
        let tail = &token[start..];
        let boundaries: Vec<usize> = tail
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(tail.len()))
            .collect();
        let tail_chars = boundaries.len() - 1;

        // A suffix shorter than two minimal subwords cannot split further;
        // it is only acceptable as the final fragment.
        if tail_chars >= 2 * self.min_subword_len {
            for split in self.min_subword_len..=(tail_chars - self.min_subword_len) {
                let prefix = &tail[..boundaries[split]];
                if !self.lexicon.contains(prefix) {
                    continue;
                }
                if let Some(parts) = self.segment_rest(token, start + boundaries[split], memo) {
                    let mut all = Vec::with_capacity(parts.len() + 1);
                    all.push(prefix.to_string());
                    all.extend(parts);
                    return Some(all);
                }
            }
        }

        self.accept_final(tail).map(|fragment| vec![fragment])
    }

    /// Bridge a connector after an accepted prefix and segment what follows
    fn segment_rest(&self, token: &str, after_prefix: usize, memo: &mut Memo) -> Option<Vec<String>> {
        let rest = &token[after_prefix..];
        for connector in self.connectors.candidates() {
            match rest.strip_prefix(connector) {
                Some(remainder) if !remainder.is_empty() => {
                    let tail_start = after_prefix + connector.len();
                    if let Some(parts) = self.segment_suffix(token, tail_start, memo) {
                        return Some(parts);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Accept the trailing fragment raw, or through a single suffix rewrite
    ///
    /// Internal prefixes never pass through here: normalization applies to
    /// the trailing fragment of the token only.
    fn accept_final(&self, fragment: &str) -> Option<String> {
        if fragment.chars().count() < self.min_subword_len {
            return None;
        }
        if self.lexicon.contains(fragment) {
            return Some(fragment.to_string());
        }
        self.normalizer
            .normalize(fragment, self.lexicon)
            .filter(|stem| stem.chars().count() >= self.min_subword_len)
    }
}
