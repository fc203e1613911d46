//! Error types for runtime environment loading.
//!
//! Responsibilities:
//! - Define error variants for every way a load attempt can fail.
//! - Classify errors into the two kinds callers react to (file not found vs.
//!   any other load failure).
//!
//! Does NOT handle:
//! - Storing the most recent error (see `env_loader::last_load_error`).
//!
//! Invariants:
//! - Errors NEVER include raw env file lines or values, only paths, key names,
//!   and I/O error kinds. The one exception is `InvalidStage`, whose value is a
//!   stage name rather than a credential.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::settings::SettingsError;

/// Coarse classification of a load failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The env file does not exist at the resolved path.
    FileNotFound,
    /// Any other failure while reading, parsing, exporting, or forwarding.
    LoadFailure,
}

/// Errors that can occur while loading the runtime environment file.
#[derive(Error, Debug)]
pub enum EnvLoadError {
    #[error("Runtime env file not found at {path}")]
    FileNotFound { path: PathBuf },

    /// The file exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("Failed to read runtime env file at {path}: {kind}")]
    Read { path: PathBuf, kind: ErrorKind },

    #[error("Unable to determine current directory: {kind}")]
    CurrentDir { kind: ErrorKind },

    /// A key or value contains a NUL byte and cannot be exported.
    ///
    /// SAFETY: Only the key name is included, never the value.
    #[error("Cannot export variable {key}: key or value contains a NUL byte")]
    InvalidVariable { key: String },

    #[error("Invalid value for ENV: '{value}' (expected development, stage, or production)")]
    InvalidStage { value: String },

    #[error("Failed to apply runtime settings: {0}")]
    Settings(#[from] SettingsError),

    /// A panic inside the loader, caught at its boundary.
    #[error("Unexpected failure loading runtime environment variables: {message}")]
    Panicked { message: String },
}

impl EnvLoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            EnvLoadError::FileNotFound { .. } => LoadErrorKind::FileNotFound,
            _ => LoadErrorKind::LoadFailure,
        }
    }
}
