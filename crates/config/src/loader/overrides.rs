//! Extraction of recognized keys from a parsed env file.
//!
//! Responsibilities:
//! - Pick the stage, per-stage URLs, and Sentry credentials out of an `EnvMap`.
//! - Apply `CUSTOM_URL` precedence over the stage-specific URL keys.
//! - Forward the extracted values to a `SettingsSink`.
//!
//! Does NOT handle:
//! - Exporting variables to the process environment (see `env_loader.rs`).
//!
//! Invariants:
//! - Empty values count as absent and never reach a setter.
//! - A non-empty `CUSTOM_URL` is used for every stage.
//! - An unknown `ENV` value is an error, raised before any setter is invoked.
//! - Setters are invoked in order: stage, URLs (production, stage,
//!   development), DSN, endpoint. The first setter error stops forwarding.

use secrecy::SecretString;
use std::collections::BTreeMap;

use super::error::EnvLoadError;
use super::parser::EnvMap;
use crate::constants::{KEY_CUSTOM_URL, KEY_ENV, KEY_SENTRY_DSN, KEY_SENTRY_ENDPOINT};
use crate::settings::{SettingsError, SettingsSink};
use crate::types::DeploymentStage;

/// Values from one env file that feed the runtime settings.
#[derive(Debug, Clone, Default)]
pub struct RuntimeOverrides {
    pub stage: Option<DeploymentStage>,
    pub urls: BTreeMap<DeploymentStage, String>,
    pub sentry_dsn: Option<SecretString>,
    pub sentry_endpoint: Option<String>,
}

fn non_empty<'a>(vars: &'a EnvMap, key: &str) -> Option<&'a str> {
    vars.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

impl RuntimeOverrides {
    /// Extract recognized keys from `vars`.
    pub fn from_vars(vars: &EnvMap) -> Result<Self, EnvLoadError> {
        let stage = non_empty(vars, KEY_ENV)
            .map(|value| {
                value.parse::<DeploymentStage>().map_err(|_| EnvLoadError::InvalidStage {
                    value: value.to_string(),
                })
            })
            .transpose()?;

        let custom_url = non_empty(vars, KEY_CUSTOM_URL);
        let urls = DeploymentStage::ALL
            .into_iter()
            .filter_map(|stage| {
                custom_url
                    .or_else(|| non_empty(vars, stage.url_key()))
                    .map(|url| (stage, url.to_string()))
            })
            .collect();

        Ok(Self {
            stage,
            urls,
            sentry_dsn: non_empty(vars, KEY_SENTRY_DSN)
                .map(|dsn| SecretString::new(dsn.to_string().into())),
            sentry_endpoint: non_empty(vars, KEY_SENTRY_ENDPOINT).map(str::to_string),
        })
    }

    /// Forward every present value to `sink`.
    pub fn apply(&self, sink: &mut dyn SettingsSink) -> Result<(), SettingsError> {
        if let Some(stage) = self.stage {
            sink.set_stage(stage)?;
        }
        for stage in DeploymentStage::ALL {
            if let Some(url) = self.urls.get(&stage) {
                sink.set_url_for_stage(url, stage)?;
            }
        }
        if let Some(dsn) = &self.sentry_dsn {
            sink.set_sentry_dsn(dsn.clone())?;
        }
        if let Some(endpoint) = &self.sentry_endpoint {
            sink.set_sentry_endpoint(endpoint)?;
        }
        Ok(())
    }
}
