//! Output formatting module

use anyhow::Result;
use fugen_core::ExpandedToken;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single expanded token
    fn format_token(&mut self, token: &ExpandedToken) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
