//! Demo command implementation

use super::init_logging;
use crate::output::{OutputFormatter, TextFormatter};
use anyhow::Result;
use clap::Args;
use faultline_core::{classify, extract, Failure, NOT_FOUND};
use faultline_pipeline::walkthrough::{divide, fetch_resource, find_user, load_app, process};
use faultline_pipeline::Disposition;
use std::io::{self, Write};
use std::process::ExitCode;

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl DemoArgs {
    /// Execute the demo command
    ///
    /// The last section runs the pipeline and treats its failure as fatal.
    pub fn execute(&self) -> Result<ExitCode> {
        init_logging(self.verbose, self.quiet);

        let stdout = io::stdout();
        let failure = run_demo(&mut stdout.lock())?;

        match failure {
            None => Ok(ExitCode::SUCCESS),
            Some(failure) => {
                let mut formatter = TextFormatter::new(io::stderr());
                formatter.format_failure(&failure, &Disposition::Fatal)?;
                formatter.finish()?;
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

/// Write every walkthrough section to `out`
///
/// Returns the failure of the final pipeline section, if any.
pub fn run_demo<W: Write>(out: &mut W) -> Result<Option<Failure>> {
    writeln!(out, "SECTION 1: Basic Error Handling")?;
    match divide(10, 0) {
        Ok(result) => writeln!(out, "Result: {result}")?,
        Err(failure) => writeln!(out, "Error: {failure}")?,
    }
    writeln!(out)?;

    writeln!(out, "SECTION 2: Creating and Wrapping Errors")?;
    if let Err(failure) = load_app() {
        writeln!(out, "Wrapped Error: {failure}")?;
    }
    writeln!(out)?;

    writeln!(out, "SECTION 3: Sentinel Errors")?;
    if let Err(failure) = find_user(42) {
        if classify(&failure, &NOT_FOUND) {
            writeln!(out, "User not found (sentinel error)")?;
        }
    }
    writeln!(out)?;

    writeln!(out, "SECTION 4: Custom Error Types")?;
    if let Err(failure) = fetch_resource() {
        if let Some(custom) = extract(&failure) {
            writeln!(
                out,
                "Custom Error - Status code: {}, Message: {}",
                custom.code, custom.detail
            )?;
        }
    }
    writeln!(out)?;

    writeln!(out, "SECTION 5: Anti-Patterns")?;
    if let Err(failure) = divide(1, 0) {
        writeln!(out, "Handled error instead of ignoring: {failure}")?;
    }
    writeln!(out)?;

    writeln!(out, "SECTION 6: Real-World Example: Error Propagation")?;
    out.flush()?;
    Ok(process().err())
}
