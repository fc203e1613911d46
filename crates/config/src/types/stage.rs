//! Deployment stage type.
//!
//! Responsibilities:
//! - Define the fixed set of deployment stages the application can target.
//! - Parse stage names from the `ENV` key and map stages to their URL keys.
//!
//! Does NOT handle:
//! - Storing the current stage or its URLs (see `settings` module).
//!
//! Invariants:
//! - Stage names are lowercase and matched exactly.
//! - `DeploymentStage::ALL` is ordered production, stage, development.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{KEY_DEV_URL, KEY_PROD_URL, KEY_STAGE_URL};

/// A named environment the running application targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStage {
    Development,
    Stage,
    Production,
}

impl DeploymentStage {
    /// All stages, in the order their URLs are forwarded.
    pub const ALL: [DeploymentStage; 3] = [
        DeploymentStage::Production,
        DeploymentStage::Stage,
        DeploymentStage::Development,
    ];

    /// The lowercase name used in env files.
    pub const fn as_str(self) -> &'static str {
        match self {
            DeploymentStage::Development => "development",
            DeploymentStage::Stage => "stage",
            DeploymentStage::Production => "production",
        }
    }

    /// The stage-specific URL key (`PROD_URL`, `STAGE_URL`, `DEV_URL`).
    pub const fn url_key(self) -> &'static str {
        match self {
            DeploymentStage::Development => KEY_DEV_URL,
            DeploymentStage::Stage => KEY_STAGE_URL,
            DeploymentStage::Production => KEY_PROD_URL,
        }
    }
}

impl fmt::Display for DeploymentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known deployment stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStage(pub String);

impl fmt::Display for UnknownStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown deployment stage '{}' (expected development, stage, or production)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStage {}

impl FromStr for DeploymentStage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(DeploymentStage::Development),
            "stage" => Ok(DeploymentStage::Stage),
            "production" => Ok(DeploymentStage::Production),
            other => Err(UnknownStage(other.to_string())),
        }
    }
}
