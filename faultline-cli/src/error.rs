//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Scenario file not found or inaccessible
    ScenarioNotFound(String),
    /// Scenario file could not be parsed or assembled
    InvalidScenario(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ScenarioNotFound(path) => write!(f, "Scenario file not found: {path}"),
            CliError::InvalidScenario(msg) => write!(f, "Invalid scenario: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
