//! Configuration types for the pipeline

use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};

/// Context added when the fetch step fails
pub const DEFAULT_FETCH_CONTEXT: &str = "fetch failed";

/// Context added when the save step fails
pub const DEFAULT_SAVE_CONTEXT: &str = "db save failed";

/// Pipeline configuration
///
/// Only the context strings are configurable. Classification never looks
/// at them, so renaming a context cannot change how a failure is matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Context wrapped around fetch failures
    pub fetch_context: String,
    /// Context wrapped around save failures
    pub save_context: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fetch_context: DEFAULT_FETCH_CONTEXT.to_string(),
            save_context: DEFAULT_SAVE_CONTEXT.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Set the fetch context
    pub fn fetch_context(mut self, context: impl Into<String>) -> Self {
        self.fetch_context = context.into();
        self
    }

    /// Set the save context
    pub fn save_context(mut self, context: impl Into<String>) -> Self {
        self.save_context = context.into();
        self
    }

    /// Reject blank context strings
    pub fn validate(&self) -> Result<()> {
        if self.fetch_context.trim().is_empty() {
            return Err(PipelineError::ConfigError(
                "fetch context is empty".to_string(),
            ));
        }
        if self.save_context.trim().is_empty() {
            return Err(PipelineError::ConfigError(
                "save context is empty".to_string(),
            ));
        }
        Ok(())
    }
}
