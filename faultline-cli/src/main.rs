//! faultline command-line entry point

use clap::Parser;
use faultline_cli::commands::Commands;
use std::process::ExitCode;

/// Exercise failure creation, wrapping and classification
#[derive(Debug, Parser)]
#[command(name = "faultline", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command.execute() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
