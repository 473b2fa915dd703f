//! Run command implementation

use super::init_logging;
use crate::config::load_scenario;
use crate::error::CliError;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::Result;
use clap::Args;
use faultline_core::Failure;
use faultline_pipeline::{decide, Disposition, FailureSpec, Scenario};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Scenario file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Make the fetch step fail
    #[arg(long, value_enum, value_name = "KIND")]
    pub fail_fetch: Option<InjectedFailure>,

    /// Make the save step fail
    #[arg(long, value_enum, value_name = "KIND")]
    pub fail_save: Option<InjectedFailure>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Recover from classified failures instead of exiting non-zero
    #[arg(short, long)]
    pub recover: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Failure message and classification on stderr
    Text,
    /// Failure report as JSON on stdout
    Json,
}

/// Failures that can be injected from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InjectedFailure {
    /// Plain message failure
    Value,
    /// The canonical not-found sentinel
    NotFound,
    /// HTTP 404 custom failure
    Http404,
    /// HTTP 500 custom failure
    Http500,
}

impl InjectedFailure {
    /// Scenario spec for this failure
    pub fn to_spec(self) -> FailureSpec {
        match self {
            InjectedFailure::Value => FailureSpec::value("injected failure"),
            InjectedFailure::NotFound => FailureSpec::sentinel("not_found"),
            InjectedFailure::Http404 => FailureSpec::custom(404, "Not Found"),
            InjectedFailure::Http500 => FailureSpec::custom(500, "Internal Server Error"),
        }
    }
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self) -> Result<ExitCode> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting pipeline run");
        log::debug!("Arguments: {:?}", self);

        let scenario = self.scenario()?;
        let pipeline = scenario
            .build()
            .map_err(|e| CliError::InvalidScenario(e.to_string()))?;

        match pipeline.run() {
            Ok(()) => {
                log::info!("Pipeline completed");
                println!("pipeline completed");
                Ok(ExitCode::SUCCESS)
            }
            Err(failure) => {
                let disposition = if self.recover {
                    decide(&failure)
                } else {
                    Disposition::Fatal
                };
                self.report(&failure, &disposition)?;
                Ok(if disposition.is_fatal() {
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                })
            }
        }
    }

    /// Resolve the scenario from the config file and command-line overrides
    fn scenario(&self) -> Result<Scenario> {
        let mut scenario = match &self.config {
            Some(path) => load_scenario(path)?,
            None => Scenario::default(),
        };
        if let Some(kind) = self.fail_fetch {
            scenario.fetch.fail = Some(kind.to_spec());
        }
        if let Some(kind) = self.fail_save {
            scenario.save.fail = Some(kind.to_spec());
        }
        Ok(scenario)
    }

    fn report(&self, failure: &Failure, disposition: &Disposition) -> Result<()> {
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(io::stderr())),
            OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout())),
        };
        formatter.format_failure(failure, disposition)?;
        formatter.finish()
    }
}
