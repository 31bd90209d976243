//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use fugen_core::ExpandedToken;
use std::io::Write;

/// JSON formatter - outputs the expanded token stream as a JSON array
///
/// Tokens are buffered and written on [`OutputFormatter::finish`], relying
/// on the serde derives of [`ExpandedToken`] itself.
pub struct JsonFormatter<W: Write> {
    writer: W,
    tokens: Vec<ExpandedToken>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tokens: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_token(&mut self, token: &ExpandedToken) -> Result<()> {
        self.tokens.push(token.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.tokens)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
