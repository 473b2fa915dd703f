//! Failure values for layered call chains
//!
//! This crate models an error as a [`Failure`]: a terminal value (plain
//! message, process-wide sentinel, or structured custom error) optionally
//! wrapped in any number of context layers. Callers classify a failure by
//! walking its chain, never by matching on the rendered message.
//!
//! ```
//! use faultline_core::{classify, extract, wrap, Failure, NOT_FOUND};
//!
//! let err = wrap("load user", wrap("query", Failure::sentinel(&NOT_FOUND)));
//! assert!(classify(&err, &NOT_FOUND));
//! assert_eq!(err.message(), "load user: query: not found");
//!
//! let err = wrap("fetch failed", Failure::custom(404, "Not Found"));
//! assert_eq!(extract(&err).map(|c| c.code), Some(404));
//! ```

#![warn(missing_docs)]

pub mod chain;
pub mod context;
pub mod custom;
pub mod failure;
pub mod report;
pub mod sentinel;
pub mod value;

// Re-export key types
pub use chain::{Chain, ChainedError};
pub use context::Context;
pub use custom::CustomError;
pub use failure::{Failure, FailureKind, Result};
pub use report::{FailureReport, RootReport};
pub use sentinel::{
    lookup, registry, Sentinel, NOT_FOUND, PERMISSION_DENIED, TIMED_OUT, UNAVAILABLE,
};
pub use value::ErrorValue;

/// Wrap `cause` in a new context layer
pub fn wrap(context: impl Into<String>, cause: impl Into<Failure>) -> Failure {
    Failure::wrap(context, cause)
}

/// Check whether `sentinel` terminates the chain of `failure`
pub fn classify(failure: &Failure, sentinel: &Sentinel) -> bool {
    failure.is(sentinel)
}

/// Copy out the custom error terminating the chain of `failure`, if any
pub fn extract(failure: &Failure) -> Option<CustomError> {
    failure.as_custom().cloned()
}

/// Render the fully resolved message of `failure`
pub fn message(failure: &Failure) -> String {
    failure.message()
}

/// Step one layer down the chain
///
/// Returns the immediate cause of a chained failure and `None` for terminal
/// variants. Every classification in this crate is built on this step.
pub fn unwrap(failure: &Failure) -> Option<&Failure> {
    failure.cause()
}
