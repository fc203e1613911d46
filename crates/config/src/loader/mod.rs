//! Runtime environment file loading.
//!
//! Responsibilities:
//! - Load `KEY=VALUE` pairs from `.env.local` at startup.
//! - Export them to the process environment and forward recognized keys to the
//!   runtime settings.
//! - Keep the most recent load error available for later inspection.
//!
//! Does NOT handle:
//! - Holding the runtime settings themselves (see `settings.rs`).
//! - Value validation beyond the deployment stage name.
//!
//! Invariants / Assumptions:
//! - File contents override any previously defined variable of the same name.
//! - `load_environment()` must be called explicitly; nothing loads on import.
//! - The `DOTENV_DISABLED` variable is checked before any file access.

mod env_loader;
mod error;
mod locate;
mod overrides;
mod parser;

#[cfg(test)]
mod tests;

pub use env_loader::{
    EnvLoader, LoadOutcome, LoadedEnv, last_load_error, load_environment, load_environment_with,
};
pub use error::{EnvLoadError, LoadErrorKind};
pub use locate::{Packaging, resources_dir_for_exe};
pub use overrides::RuntimeOverrides;
pub use parser::{EnvMap, parse_env, parse_line};
