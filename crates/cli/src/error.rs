//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `EnvLoadError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 4 always means the env file was not found.

use astra_config::EnvLoadError;
use std::sync::Arc;

/// Structured exit codes for astra-env.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unreadable file, settings failure, or anything else.
    GeneralError = 1,

    /// The env file does not exist at the resolved path.
    ///
    /// Scripts can treat this as "build-time defaults apply".
    NotFound = 4,

    /// The env file holds a value the loader rejects (unknown stage, NUL byte).
    ///
    /// Scripts should fix the file and not retry unchanged.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&EnvLoadError> for ExitCode {
    fn from(err: &EnvLoadError) -> Self {
        match err {
            EnvLoadError::FileNotFound { .. } => ExitCode::NotFound,
            EnvLoadError::InvalidStage { .. } | EnvLoadError::InvalidVariable { .. } => {
                ExitCode::ValidationError
            }
            EnvLoadError::Read { .. }
            | EnvLoadError::CurrentDir { .. }
            | EnvLoadError::Settings(_)
            | EnvLoadError::Panicked { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no `EnvLoadError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<EnvLoadError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<Arc<EnvLoadError>>() {
                return ExitCode::from(err.as_ref());
            }
        }
        ExitCode::GeneralError
    }
}
