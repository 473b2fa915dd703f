//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::process::ExitCode;

pub mod demo;
pub mod list;
pub mod run;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the fetch-then-save pipeline with injected failures
    Run(run::RunArgs),

    /// Walk through creating, wrapping and classifying failures
    Demo(demo::DemoArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the canonical sentinel failures
    Sentinels,

    /// List the failure kinds accepted by --fail-fetch and --fail-save
    Kinds,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<ExitCode> {
        match self {
            Commands::Run(args) => args.execute(),
            Commands::Demo(args) => args.execute(),
            Commands::List { subcommand } => {
                list::execute(subcommand)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
