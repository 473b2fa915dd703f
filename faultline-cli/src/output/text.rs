//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use faultline_core::Failure;
use faultline_pipeline::Disposition;
use std::io::Write;

/// Text formatter - one line per failure plus its classification
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_failure(&mut self, failure: &Failure, disposition: &Disposition) -> Result<()> {
        match disposition {
            Disposition::Fatal => writeln!(self.writer, "process failed: {failure}")?,
            Disposition::Recover { reason } => {
                writeln!(self.writer, "recovered ({reason}): {failure}")?
            }
        }
        if let Some(sentinel) = failure.as_sentinel() {
            writeln!(self.writer, "  sentinel: {}", sentinel.name())?;
        }
        if let Some(custom) = failure.as_custom() {
            writeln!(self.writer, "  status: {} ({})", custom.code, custom.detail)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
