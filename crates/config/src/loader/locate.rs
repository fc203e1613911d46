//! Packaging-dependent location of the runtime env file.
//!
//! Responsibilities:
//! - Decide whether the process runs from a packaged build or a development
//!   checkout.
//! - Resolve the env file path against the resources directory (packaged) or
//!   the current working directory (development).
//!
//! Does NOT handle:
//! - Checking whether the file exists or reading it (see `env_loader.rs`).
//!
//! Invariants:
//! - Debug builds are always treated as development checkouts.
//! - Detection never fails; an unknown executable path falls back to
//!   development with a warning.

use std::path::{Path, PathBuf};

use super::error::EnvLoadError;
use crate::constants::{MACOS_RESOURCES_DIR_NAME, RESOURCES_DIR_NAME};

/// How the host application was launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packaging {
    /// Running from a local checkout; the env file lives in the working directory.
    Development,
    /// Running from an installed build; the env file lives in `resources_dir`.
    Packaged { resources_dir: PathBuf },
}

impl Packaging {
    /// Detect the packaging state of the running executable.
    pub fn detect() -> Self {
        if cfg!(debug_assertions) {
            return Packaging::Development;
        }

        match std::env::current_exe() {
            Ok(exe) => match resources_dir_for_exe(&exe) {
                Some(resources_dir) => Packaging::Packaged { resources_dir },
                None => {
                    tracing::warn!(
                        exe = %exe.display(),
                        "Executable has no parent directory, treating build as unpackaged"
                    );
                    Packaging::Development
                }
            },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Unable to determine executable path, treating build as unpackaged"
                );
                Packaging::Development
            }
        }
    }

    pub fn is_packaged(&self) -> bool {
        matches!(self, Packaging::Packaged { .. })
    }

    /// Resolve `file_name` for this packaging state.
    pub fn env_file_path(&self, file_name: &str) -> Result<PathBuf, EnvLoadError> {
        match self {
            Packaging::Packaged { resources_dir } => Ok(resources_dir.join(file_name)),
            Packaging::Development => {
                let cwd = std::env::current_dir()
                    .map_err(|e| EnvLoadError::CurrentDir { kind: e.kind() })?;
                Ok(cwd.join(file_name))
            }
        }
    }
}

/// Resources directory for an installed executable.
///
/// - macOS: `<App>.app/Contents/MacOS/<exe>` -> `<App>.app/Contents/Resources`
/// - elsewhere: `<install dir>/<exe>` -> `<install dir>/resources`
pub fn resources_dir_for_exe(exe: &Path) -> Option<PathBuf> {
    let exe_dir = exe.parent()?;
    if cfg!(target_os = "macos") {
        Some(exe_dir.parent()?.join(MACOS_RESOURCES_DIR_NAME))
    } else {
        Some(exe_dir.join(RESOURCES_DIR_NAME))
    }
}
