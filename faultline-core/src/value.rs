//! Plain message failures

use thiserror::Error;

/// Terminal failure carrying nothing but a message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ErrorValue {
    message: String,
}

impl ErrorValue {
    /// Create a value failure with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message, verbatim
    pub fn message(&self) -> &str {
        &self.message
    }
}
