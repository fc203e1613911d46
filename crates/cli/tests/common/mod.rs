//! Shared test utilities for astra-env integration tests.
//!
//! Invariants / Assumptions:
//! - Commands run inside a caller-provided temp directory.
//! - Host variables that change loader behavior are cleared.

use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// Returns a hermetic `astra-env` command running in `dir`.
pub fn astra_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("astra-env");
    cmd.current_dir(dir);

    cmd.env_remove("DOTENV_DISABLED")
        .env_remove("ASTRA_RESOURCES_DIR")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `content` to `dir/.env.local`.
#[allow(dead_code)]
pub fn write_env_file(dir: &Path, content: &str) {
    fs::write(dir.join(".env.local"), content).expect("Failed to write env file");
}
