//! Tests for the runtime environment loader.
//!
//! Responsibilities:
//! - Test end-to-end load attempts against temporary env files.
//! - Test the last-load-error slot and failure isolation.
//! - Test `DOTENV_DISABLED` gating and working-directory resolution.
//!
//! Does NOT handle:
//! - Line parsing rules (tested in parser.rs).
//! - Key extraction rules (tested in overrides.rs).
//!
//! Invariants:
//! - Tests use `serial_test` because the process environment, the settings
//!   global, and the error slot are shared.
//! - Every test unsets the variables it may export via `temp_env`, which
//!   restores them afterwards.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use secrecy::SecretString;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::loader::env_loader::EnvLoader;
use crate::loader::locate::Packaging;
use crate::settings::{SettingsError, SettingsSink};
use crate::types::DeploymentStage;


/// Variables that tests may export or that influence loading.
pub const TOUCHED_VARS: &[&str] = &[
    "DOTENV_DISABLED",
    "ENV",
    "CUSTOM_URL",
    "PROD_URL",
    "STAGE_URL",
    "DEV_URL",
    "ASTRA_ELECTRON_SENTRY_DSN",
    "ASTRA_ELECTRON_SENTRY_ENDPOINT",
    "ASTRA_TEST_FEATURE_FLAG",
    "ASTRA_TEST_SECOND",
];

/// Write `content` to `.env.local` inside `dir`.
pub fn write_env_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join(".env.local");
    fs::write(&path, content).expect("Failed to write env file");
    path
}

/// Loader resolving `.env.local` inside `dir` as a packaged build would.
pub fn packaged_loader(dir: &TempDir) -> EnvLoader {
    EnvLoader::for_packaging(Packaging::Packaged {
        resources_dir: dir.path().to_path_buf(),
    })
}

/// Sink whose setters always fail.
pub struct RejectingSink;

impl SettingsSink for RejectingSink {
    fn set_stage(&mut self, _stage: DeploymentStage) -> Result<(), SettingsError> {
        Err(SettingsError::Rejected {
            setter: "set_stage",
            message: "stage changes are locked".to_string(),
        })
    }

    fn set_url_for_stage(
        &mut self,
        _url: &str,
        _stage: DeploymentStage,
    ) -> Result<(), SettingsError> {
        Err(SettingsError::Poisoned)
    }

    fn set_sentry_dsn(&mut self, _dsn: SecretString) -> Result<(), SettingsError> {
        Err(SettingsError::Poisoned)
    }

    fn set_sentry_endpoint(&mut self, _endpoint: &str) -> Result<(), SettingsError> {
        Err(SettingsError::Poisoned)
    }
}

/// Sink that panics on the first setter call.
pub struct PanickingSink;

impl SettingsSink for PanickingSink {
    fn set_stage(&mut self, _stage: DeploymentStage) -> Result<(), SettingsError> {
        panic!("settings backend exploded");
    }

    fn set_url_for_stage(
        &mut self,
        _url: &str,
        _stage: DeploymentStage,
    ) -> Result<(), SettingsError> {
        panic!("settings backend exploded");
    }

    fn set_sentry_dsn(&mut self, _dsn: SecretString) -> Result<(), SettingsError> {
        panic!("settings backend exploded");
    }

    fn set_sentry_endpoint(&mut self, _endpoint: &str) -> Result<(), SettingsError> {
        panic!("settings backend exploded");
    }
}
