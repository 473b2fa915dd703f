//! Deciding what to do with a pipeline failure
//!
//! One possible caller policy built on classification. Nothing in the
//! pipeline itself depends on it.

use faultline_core::{Failure, NOT_FOUND};

/// What a caller should do with a failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Stop; the failure is unrecoverable
    Fatal,
    /// Continue with a fallback
    Recover {
        /// Why recovery is allowed
        reason: String,
    },
}

impl Disposition {
    /// Whether this disposition stops the caller
    pub fn is_fatal(&self) -> bool {
        matches!(self, Disposition::Fatal)
    }
}

/// Classify `failure` into a disposition
///
/// A missing item recovers with defaults and a client-side status recovers
/// by skipping the record. Everything else, including server errors and
/// plain messages, is fatal.
pub fn decide(failure: &Failure) -> Disposition {
    if failure.is(&NOT_FOUND) {
        return Disposition::Recover {
            reason: "item not found, using defaults".to_string(),
        };
    }
    match failure.as_custom() {
        Some(custom) if custom.is_client_error() => Disposition::Recover {
            reason: format!("client error {}, skipping record", custom.code),
        },
        _ => Disposition::Fatal,
    }
}
