//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use faultline_core::{Failure, FailureReport};
use faultline_pipeline::Disposition;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs each failure report as a JSON document
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<FailureRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct FailureRecord {
    /// Flattened failure
    pub failure: FailureReport,
    /// Whether the caller stops
    pub fatal: bool,
    /// Recovery reason, when not fatal
    pub recovery: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_failure(&mut self, failure: &Failure, disposition: &Disposition) -> Result<()> {
        let recovery = match disposition {
            Disposition::Fatal => None,
            Disposition::Recover { reason } => Some(reason.clone()),
        };
        self.records.push(FailureRecord {
            failure: failure.report(),
            fatal: disposition.is_fatal(),
            recovery,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        for record in &self.records {
            serde_json::to_writer_pretty(&mut self.writer, record)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
