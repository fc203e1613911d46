//! Astra env - diagnostic CLI for the runtime environment loader.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Run the runtime env loader the way the desktop application does at startup.
//! - Report the outcome as a table or JSON with structured exit codes.
//!
//! Does NOT handle:
//! - Loading or parsing logic (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr; command output goes to stdout.
//! - `RUST_LOG` overrides the default log level chosen by `--verbose`.

mod args;
mod commands;
mod dispatch;
mod error;
mod output;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
