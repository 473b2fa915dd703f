//! Flattened, serializable view of a failure

use crate::custom::CustomError;
use crate::failure::{Failure, FailureKind};

/// Summary of a failure and its classification
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FailureReport {
    /// Variant of the outermost layer
    pub kind: FailureKind,
    /// Fully resolved message
    pub message: String,
    /// Context strings, outermost first
    pub contexts: Vec<String>,
    /// The terminal node
    pub root: RootReport,
    /// Name of the terminating sentinel, if any
    pub sentinel: Option<&'static str>,
    /// Terminating custom error, if any
    pub custom: Option<CustomError>,
}

/// The terminal node of a reported chain
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RootReport {
    /// Terminal variant
    pub kind: FailureKind,
    /// Message of the terminal node alone
    pub message: String,
}

impl From<&Failure> for FailureReport {
    fn from(failure: &Failure) -> Self {
        let root = failure.root();
        Self {
            kind: failure.kind(),
            message: failure.message(),
            contexts: failure.contexts().into_iter().map(str::to_owned).collect(),
            root: RootReport {
                kind: root.kind(),
                message: root.message(),
            },
            sentinel: failure.as_sentinel().map(|s| s.name()),
            custom: failure.as_custom().cloned(),
        }
    }
}

impl Failure {
    /// Build a [`FailureReport`] for this failure
    pub fn report(&self) -> FailureReport {
        FailureReport::from(self)
    }
}
