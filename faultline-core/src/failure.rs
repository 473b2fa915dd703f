//! The failure type and its traversal

use crate::chain::{Chain, ChainedError};
use crate::custom::CustomError;
use crate::sentinel::Sentinel;
use crate::value::ErrorValue;
use std::fmt;
use thiserror::Error;

/// A failure: one terminal value, optionally wrapped in context layers
///
/// Failures are immutable once built. Cloning is cheap for chained
/// failures and the type is `Send + Sync`, so one value may be classified
/// from many threads at once.
#[derive(Error, Debug, Clone)]
pub enum Failure {
    /// Plain message
    #[error(transparent)]
    Value(ErrorValue),

    /// Canonical sentinel, matched by identity
    #[error("{0}")]
    Sentinel(&'static Sentinel),

    /// Structured error, matched by variant
    #[error(transparent)]
    Custom(CustomError),

    /// Context wrapped around a cause
    #[error(transparent)]
    Chained(ChainedError),
}

/// Variant of a [`Failure`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FailureKind {
    /// [`Failure::Value`]
    Value,
    /// [`Failure::Sentinel`]
    Sentinel,
    /// [`Failure::Custom`]
    Custom,
    /// [`Failure::Chained`]
    Chained,
}

impl FailureKind {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Value => "value",
            FailureKind::Sentinel => "sentinel",
            FailureKind::Custom => "custom",
            FailureKind::Chained => "chained",
        }
    }

    /// Whether this variant ends a chain
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FailureKind::Chained)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Failure {
    /// Plain message failure
    pub fn value(message: impl Into<String>) -> Self {
        Failure::Value(ErrorValue::new(message))
    }

    /// Failure for a canonical sentinel
    pub fn sentinel(sentinel: &'static Sentinel) -> Self {
        Failure::Sentinel(sentinel)
    }

    /// Structured failure with a status code
    pub fn custom(code: u16, detail: impl Into<String>) -> Self {
        Failure::Custom(CustomError::new(code, detail))
    }

    /// Wrap `cause` in a new context layer
    pub fn wrap(context: impl Into<String>, cause: impl Into<Failure>) -> Self {
        Failure::Chained(ChainedError::new(context, cause.into()))
    }

    /// Variant of this layer
    pub fn kind(&self) -> FailureKind {
        match self {
            Failure::Value(_) => FailureKind::Value,
            Failure::Sentinel(_) => FailureKind::Sentinel,
            Failure::Custom(_) => FailureKind::Custom,
            Failure::Chained(_) => FailureKind::Chained,
        }
    }

    /// Fully resolved message, outermost context first
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Immediate cause, `None` for terminal variants
    pub fn cause(&self) -> Option<&Failure> {
        match self {
            Failure::Chained(chained) => Some(chained.cause()),
            _ => None,
        }
    }

    /// Iterate over every layer, starting with `self`
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// The terminal node of the chain
    pub fn root(&self) -> &Failure {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }

    /// Number of context layers above the root
    pub fn depth(&self) -> usize {
        self.chain().count() - 1
    }

    /// Context strings, outermost first
    pub fn contexts(&self) -> Vec<&str> {
        self.chain()
            .filter_map(|layer| match layer {
                Failure::Chained(chained) => Some(chained.context()),
                _ => None,
            })
            .collect()
    }

    /// Check whether `sentinel` terminates this chain
    pub fn is(&self, sentinel: &Sentinel) -> bool {
        matches!(self.root(), Failure::Sentinel(root) if *root == sentinel)
    }

    /// The sentinel terminating this chain, if any
    pub fn as_sentinel(&self) -> Option<&'static Sentinel> {
        match self.root() {
            Failure::Sentinel(root) => Some(*root),
            _ => None,
        }
    }

    /// The custom error terminating this chain, if any
    pub fn as_custom(&self) -> Option<&CustomError> {
        match self.root() {
            Failure::Custom(custom) => Some(custom),
            _ => None,
        }
    }
}

impl From<ErrorValue> for Failure {
    fn from(value: ErrorValue) -> Self {
        Failure::Value(value)
    }
}

impl From<&'static Sentinel> for Failure {
    fn from(sentinel: &'static Sentinel) -> Self {
        Failure::Sentinel(sentinel)
    }
}

impl From<CustomError> for Failure {
    fn from(custom: CustomError) -> Self {
        Failure::Custom(custom)
    }
}

impl From<ChainedError> for Failure {
    fn from(chained: ChainedError) -> Self {
        Failure::Chained(chained)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Failure::value(message)
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Failure::value(message)
    }
}

/// Result type for fallible operations reporting a [`Failure`]
pub type Result<T> = std::result::Result<T, Failure>;
