//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Build an `EnvLoader` from the packaging flags.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use anyhow::Context;
use astra_config::constants::ENV_FILE_NAME;
use astra_config::{EnvLoader, Packaging, resources_dir_for_exe};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "astra-env")]
#[command(about = "Inspect the runtime environment file loaded at application startup", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  astra-env check\n  astra-env --resources-dir /opt/astra/resources check\n  astra-env -o json settings\n  astra-env parse .env.local --show-values\n"
)]
pub struct Cli {
    /// Resolve the env file as a packaged build would (next to the executable)
    #[arg(long, global = true)]
    pub packaged: bool,

    /// Resources directory of a packaged build (implies --packaged)
    #[arg(long, global = true, env = "ASTRA_RESOURCES_DIR", value_name = "DIR")]
    pub resources_dir: Option<PathBuf>,

    /// Name of the env file to load
    #[arg(long, global = true, default_value = ENV_FILE_NAME, value_name = "NAME")]
    pub file_name: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Log loader activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the env file and report what was applied
    Check,

    /// Parse an env file without applying it
    Parse {
        /// Path to the env file
        file: PathBuf,

        /// Print values instead of redacting them
        #[arg(long)]
        show_values: bool,
    },

    /// Load the env file, then print the effective runtime settings
    Settings,
}

impl Cli {
    /// Build the loader described by the packaging flags.
    ///
    /// Without `--packaged` or `--resources-dir`, the env file is resolved in
    /// the current working directory.
    pub fn loader(&self) -> anyhow::Result<EnvLoader> {
        let packaging = match (&self.resources_dir, self.packaged) {
            (Some(dir), _) => Packaging::Packaged {
                resources_dir: dir.clone(),
            },
            (None, true) => {
                let exe = std::env::current_exe()
                    .context("Failed to determine executable path for --packaged")?;
                let resources_dir = resources_dir_for_exe(&exe).with_context(|| {
                    format!("No resources directory for executable {}", exe.display())
                })?;
                Packaging::Packaged { resources_dir }
            }
            (None, false) => Packaging::Development,
        };

        Ok(EnvLoader::for_packaging(packaging).with_file_name(self.file_name.clone()))
    }
}
