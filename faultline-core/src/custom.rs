//! Structured failures with a status code

use thiserror::Error;

/// Terminal failure carrying an HTTP-style status code and detail
///
/// Matched by variant: any custom error in a chain is found by
/// [`Failure::as_custom`](crate::Failure::as_custom), whatever its code.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("HTTP {code}: {detail}")]
pub struct CustomError {
    /// Status code
    pub code: u16,
    /// Human-readable detail
    pub detail: String,
}

impl CustomError {
    /// Create a custom error
    pub fn new(code: u16, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }

    /// Code in the 400-499 range
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code)
    }

    /// Code in the 500-599 range
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code)
    }
}
