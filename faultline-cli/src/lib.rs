//! faultline CLI library
//!
//! This library provides the command-line driver for the faultline
//! failure propagation pipeline.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
