//! Pipeline configuration errors
//!
//! These describe a pipeline that cannot be built. Failures produced while
//! a pipeline runs are `faultline_core::Failure` values instead.

use thiserror::Error;

/// Errors raised while assembling a pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Scenario names a sentinel that is not in the registry
    #[error("unknown sentinel '{name}'")]
    UnknownSentinel {
        /// The name that failed to resolve
        name: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

/// Result type for pipeline assembly
pub type Result<T> = std::result::Result<T, PipelineError>;
