//! Output formatting module

use anyhow::Result;
use faultline_core::Failure;
use faultline_pipeline::Disposition;

/// Trait for failure formatters
pub trait OutputFormatter: Send + Sync {
    /// Format a pipeline failure and what the caller decided to do with it
    fn format_failure(&mut self, failure: &Failure, disposition: &Disposition) -> Result<()>;

    /// Finalize output (e.g., flush buffered JSON)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
