//! Failure propagation through a two-step pipeline
//!
//! This crate wires the failure model of `faultline-core` into a small
//! fetch-then-save pipeline where every failing layer adds its own context,
//! together with scripted steps for exercising each failure class and the
//! walkthrough operations the CLI demonstrates.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod policy;
pub mod scenario;
pub mod step;
pub mod walkthrough;

// Re-export key types
pub use config::{PipelineConfig, DEFAULT_FETCH_CONTEXT, DEFAULT_SAVE_CONTEXT};
pub use error::{PipelineError, Result};
pub use pipeline::Pipeline;
pub use policy::{decide, Disposition};
pub use scenario::{FailureSpec, FetchStep, SaveStep, Scenario, ScriptedFetcher, ScriptedStore};
pub use step::{Fetcher, Metadata, Store};

// Re-export from core for convenience
pub use faultline_core::{Failure, FailureKind};
