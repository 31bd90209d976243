//! Expansion of one input token into the output token sequence

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Role of a token within an expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenKind {
    /// The input token, passed through unchanged
    Original,
    /// A morpheme derived from the input token
    Subword,
}

/// One token of the expanded output stream
///
/// Subwords carry a position increment of zero: they stack on the original
/// token's stream position, so phrase and positional queries downstream
/// stay well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExpandedToken {
    /// Token text
    pub text: String,
    /// Whether this is the original token or a derived subword
    pub kind: TokenKind,
    /// Positions the stream counter advances before this token
    pub position_increment: u32,
}

impl ExpandedToken {
    /// True for the pass-through input token
    pub fn is_original(&self) -> bool {
        self.kind == TokenKind::Original
    }
}

/// Assembles the output sequence for one token and its decomposition
///
/// The original token always comes first, then the decomposition parts in
/// left-to-right order. Empty parts and parts below the minimum subword
/// length are dropped. In subwords-only mode the original is suppressed and
/// the first emitted part takes over its stream position.
#[derive(Debug, Clone)]
pub struct Emitter {
    min_subword_len: usize,
    subwords_only: bool,
}

impl Emitter {
    /// Build an emitter with the engine's length policy
    pub fn new(min_subword_len: usize, subwords_only: bool) -> Self {
        Self {
            min_subword_len,
            subwords_only,
        }
    }

    /// Expand one token given its accepted decomposition
    ///
    /// An empty decomposition (protected or un-processed token) yields the
    /// original token alone, also in subwords-only mode: a token may never
    /// vanish from the stream entirely.
    pub fn emit(&self, token: &str, decomposition: &[String]) -> Vec<ExpandedToken> {
        let mut output = Vec::with_capacity(decomposition.len() + 1);

        if !self.subwords_only || decomposition.is_empty() {
            output.push(ExpandedToken {
                text: token.to_string(),
                kind: TokenKind::Original,
                position_increment: 1,
            });
        }

        for part in decomposition {
            if part.is_empty() || part.chars().count() < self.min_subword_len {
                continue;
            }
            let position_increment = u32::from(output.is_empty());
            output.push(ExpandedToken {
                text: part.clone(),
                kind: TokenKind::Subword,
                position_increment,
            });
        }

        // Every filtered part was undersized; the token still has to appear.
        if output.is_empty() {
            output.push(ExpandedToken {
                text: token.to_string(),
                kind: TokenKind::Original,
                position_increment: 1,
            });
        }

        output
    }
}
