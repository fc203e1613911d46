//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Check => {
            let loader = cli.loader()?;
            commands::check::run(&loader, cli.output)
        }
        Commands::Parse { file, show_values } => {
            commands::parse::run(file, *show_values, cli.output)
        }
        Commands::Settings => {
            let loader = cli.loader()?;
            commands::settings::run(&loader, cli.output)
        }
    }
}
