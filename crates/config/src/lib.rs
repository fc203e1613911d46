//! Runtime environment loading for the Astra desktop application.
//!
//! This crate reads deployment-specific overrides from a local `.env.local`
//! file at startup, exports them to the process environment, and applies the
//! recognized keys to the process-wide runtime settings (stage URLs and
//! error-reporting credentials).

pub mod constants;
mod loader;
pub mod settings;
pub mod types;

pub use loader::{
    EnvLoadError, EnvLoader, EnvMap, LoadErrorKind, LoadOutcome, LoadedEnv, Packaging,
    RuntimeOverrides, last_load_error, load_environment, load_environment_with, parse_env,
    parse_line, resources_dir_for_exe,
};
pub use settings::{GlobalSettings, RuntimeSettings, SettingsError, SettingsSink, SettingsSummary};
pub use types::{DeploymentStage, UnknownStage};
