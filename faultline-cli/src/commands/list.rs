//! List command implementation

use super::run::InjectedFailure;
use super::ListCommands;
use anyhow::Result;
use clap::ValueEnum;
use faultline_core::registry;
use std::io::{self, Write};

/// Execute a list subcommand, writing to stdout
pub fn execute(subcommand: &ListCommands) -> Result<()> {
    let stdout = io::stdout();
    write_list(subcommand, &mut stdout.lock())
}

/// Write the requested listing to `out`
pub fn write_list<W: Write>(subcommand: &ListCommands, out: &mut W) -> Result<()> {
    match subcommand {
        ListCommands::Sentinels => {
            writeln!(out, "Canonical sentinels:")?;
            for sentinel in registry() {
                writeln!(out, "  {:<20} {}", sentinel.name(), sentinel.message())?;
            }
        }
        ListCommands::Kinds => {
            writeln!(out, "Injectable failure kinds:")?;
            for kind in InjectedFailure::value_variants() {
                if let Some(value) = kind.to_possible_value() {
                    let spec = kind.to_spec().build()?;
                    writeln!(out, "  {:<20} {}", value.get_name(), spec)?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}
