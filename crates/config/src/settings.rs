//! Process-wide runtime settings.
//!
//! Responsibilities:
//! - Hold the current deployment stage, the base URL per stage, and the
//!   error-reporting (Sentry) DSN and endpoint.
//! - Provide build-time defaults baked in with `option_env!`.
//! - Expose the four setters the environment loader forwards to, through the
//!   `SettingsSink` trait.
//!
//! Does NOT handle:
//! - Reading or parsing env files (see `loader` module).
//! - Validating URL or DSN formats; values are stored as given.
//!
//! Invariants:
//! - The Sentry DSN is held as `SecretString` and never serialized in clear.
//! - The global settings start from `RuntimeSettings::build_defaults()`.
//! - A poisoned lock is reported as `SettingsError::Poisoned` by setters and
//!   recovered from by readers.

use secrecy::SecretString;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{LazyLock, PoisonError, RwLock};
use thiserror::Error;

use crate::types::DeploymentStage;

/// Errors raised by a settings setter.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("runtime settings lock is poisoned")]
    Poisoned,

    #[error("{setter} rejected the value: {message}")]
    Rejected {
        setter: &'static str,
        message: String,
    },
}

/// Receiver of the values the environment loader forwards.
///
/// Implemented by `GlobalSettings` for the process-wide settings and by
/// `RuntimeSettings` for building a value without touching globals.
pub trait SettingsSink {
    fn set_stage(&mut self, stage: DeploymentStage) -> Result<(), SettingsError>;

    fn set_url_for_stage(&mut self, url: &str, stage: DeploymentStage)
    -> Result<(), SettingsError>;

    fn set_sentry_dsn(&mut self, dsn: SecretString) -> Result<(), SettingsError>;

    fn set_sentry_endpoint(&mut self, endpoint: &str) -> Result<(), SettingsError>;
}

/// Runtime configuration consumed by the rest of the application.
#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    /// Stage the application currently targets.
    pub stage: DeploymentStage,
    /// Base URL per stage. Stages without a URL are absent.
    pub urls: BTreeMap<DeploymentStage, String>,
    /// Error-reporting DSN.
    pub sentry_dsn: Option<SecretString>,
    /// Error-reporting endpoint.
    pub sentry_endpoint: Option<String>,
}

fn baked(value: Option<&'static str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl RuntimeSettings {
    /// Settings with no stage URLs or credentials, targeting `stage`.
    pub fn empty(stage: DeploymentStage) -> Self {
        Self {
            stage,
            urls: BTreeMap::new(),
            sentry_dsn: None,
            sentry_endpoint: None,
        }
    }

    /// Defaults baked in at compile time.
    ///
    /// Reads `ENV`, `PROD_URL`, `STAGE_URL`, `DEV_URL`,
    /// `ASTRA_ELECTRON_SENTRY_DSN`, and `ASTRA_ELECTRON_SENTRY_ENDPOINT` from
    /// the build environment. An unset or unknown `ENV` means development.
    pub fn build_defaults() -> Self {
        let stage = baked(option_env!("ENV"))
            .and_then(|s| s.parse().ok())
            .unwrap_or(DeploymentStage::Development);

        let mut settings = Self::empty(stage);
        let baked_urls = [
            (DeploymentStage::Production, baked(option_env!("PROD_URL"))),
            (DeploymentStage::Stage, baked(option_env!("STAGE_URL"))),
            (DeploymentStage::Development, baked(option_env!("DEV_URL"))),
        ];
        for (stage, url) in baked_urls {
            if let Some(url) = url {
                settings.urls.insert(stage, url);
            }
        }
        settings.sentry_dsn =
            baked(option_env!("ASTRA_ELECTRON_SENTRY_DSN")).map(|dsn| SecretString::new(dsn.into()));
        settings.sentry_endpoint = baked(option_env!("ASTRA_ELECTRON_SENTRY_ENDPOINT"));
        settings
    }

    /// Base URL for the current stage, if one is configured.
    pub fn current_url(&self) -> Option<&str> {
        self.url_for(self.stage)
    }

    /// Base URL for `stage`, if one is configured.
    pub fn url_for(&self, stage: DeploymentStage) -> Option<&str> {
        self.urls.get(&stage).map(String::as_str)
    }

    /// A serializable view with the DSN redacted.
    pub fn summary(&self) -> SettingsSummary {
        SettingsSummary {
            stage: self.stage,
            current_url: self.current_url().map(str::to_string),
            urls: self.urls.clone(),
            sentry_dsn_configured: self.sentry_dsn.is_some(),
            sentry_endpoint: self.sentry_endpoint.clone(),
        }
    }
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self::build_defaults()
    }
}

impl SettingsSink for RuntimeSettings {
    fn set_stage(&mut self, stage: DeploymentStage) -> Result<(), SettingsError> {
        self.stage = stage;
        Ok(())
    }

    fn set_url_for_stage(
        &mut self,
        url: &str,
        stage: DeploymentStage,
    ) -> Result<(), SettingsError> {
        self.urls.insert(stage, url.to_string());
        Ok(())
    }

    fn set_sentry_dsn(&mut self, dsn: SecretString) -> Result<(), SettingsError> {
        self.sentry_dsn = Some(dsn);
        Ok(())
    }

    fn set_sentry_endpoint(&mut self, endpoint: &str) -> Result<(), SettingsError> {
        self.sentry_endpoint = Some(endpoint.to_string());
        Ok(())
    }
}

/// Redacted, serializable view of `RuntimeSettings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSummary {
    pub stage: DeploymentStage,
    pub current_url: Option<String>,
    pub urls: BTreeMap<DeploymentStage, String>,
    pub sentry_dsn_configured: bool,
    pub sentry_endpoint: Option<String>,
}

static RUNTIME_SETTINGS: LazyLock<RwLock<RuntimeSettings>> =
    LazyLock::new(|| RwLock::new(RuntimeSettings::build_defaults()));

/// Snapshot of the process-wide settings.
pub fn current() -> RuntimeSettings {
    RUNTIME_SETTINGS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Restore the process-wide settings to the build-time defaults.
pub fn reset() {
    *RUNTIME_SETTINGS
        .write()
        .unwrap_or_else(PoisonError::into_inner) = RuntimeSettings::build_defaults();
}

/// Sink that writes through to the process-wide settings.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalSettings;

impl GlobalSettings {
    fn with_settings(
        &self,
        update: impl FnOnce(&mut RuntimeSettings) -> Result<(), SettingsError>,
    ) -> Result<(), SettingsError> {
        let mut guard = RUNTIME_SETTINGS
            .write()
            .map_err(|_| SettingsError::Poisoned)?;
        update(&mut guard)
    }
}

impl SettingsSink for GlobalSettings {
    fn set_stage(&mut self, stage: DeploymentStage) -> Result<(), SettingsError> {
        self.with_settings(|s| s.set_stage(stage))
    }

    fn set_url_for_stage(
        &mut self,
        url: &str,
        stage: DeploymentStage,
    ) -> Result<(), SettingsError> {
        self.with_settings(|s| s.set_url_for_stage(url, stage))
    }

    fn set_sentry_dsn(&mut self, dsn: SecretString) -> Result<(), SettingsError> {
        self.with_settings(|s| s.set_sentry_dsn(dsn))
    }

    fn set_sentry_endpoint(&mut self, endpoint: &str) -> Result<(), SettingsError> {
        self.with_settings(|s| s.set_sentry_endpoint(endpoint))
    }
}
