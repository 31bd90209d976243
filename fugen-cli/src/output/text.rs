//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use fugen_core::ExpandedToken;
use std::io::{self, Write};

/// Plain text formatter - outputs one token per line
///
/// Subwords are indented below their original so the expansion structure
/// stays readable.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_token(&mut self, token: &ExpandedToken) -> Result<()> {
        if token.is_original() {
            writeln!(self.writer, "{}", token.text)?;
        } else {
            writeln!(self.writer, "  {}", token.text)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
