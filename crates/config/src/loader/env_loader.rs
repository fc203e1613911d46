//! Runtime environment loader.
//!
//! Responsibilities:
//! - Locate, read, and parse the runtime env file (`.env.local`).
//! - Export every parsed variable to the process environment.
//! - Forward recognized keys to a `SettingsSink`.
//! - Record the most recent failure in a process-wide slot.
//!
//! Does NOT handle:
//! - Deciding packaging state (see `locate.rs`).
//! - Line parsing rules (see `parser.rs`).
//!
//! Invariants / Assumptions:
//! - `load_environment*` never returns an error or lets a panic escape; failures
//!   are stored and read back with `last_load_error()`.
//! - A missing file is recorded as `EnvLoadError::FileNotFound`.
//! - Every load attempt overwrites the slot; success clears it.
//! - Every key is exported before any setter runs. A file containing NUL is
//!   rejected before anything is exported; an unknown `ENV` value fails the
//!   load only after the export.
//! - Loading is expected to run once on the startup thread, before other
//!   threads read the environment. Concurrent loads are not guarded against.
//! - The `DOTENV_DISABLED` variable is checked before any file access.

use std::any::Any;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use super::error::EnvLoadError;
use super::locate::Packaging;
use super::overrides::RuntimeOverrides;
use super::parser::{EnvMap, parse_env};
use crate::constants::{DOTENV_DISABLED_VAR, ENV_FILE_NAME};
use crate::settings::{GlobalSettings, SettingsSink};

/// A successfully applied env file.
#[derive(Clone)]
pub struct LoadedEnv {
    /// Path the file was read from.
    pub path: PathBuf,
    /// Every variable exported to the process environment.
    pub vars: EnvMap,
    /// Recognized values forwarded to the settings sink.
    pub overrides: RuntimeOverrides,
}

impl LoadedEnv {
    /// Names of the loaded variables, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }
}

// Values may hold credentials; only key names are printed.
impl fmt::Debug for LoadedEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedEnv")
            .field("path", &self.path)
            .field("keys", &self.keys().collect::<Vec<_>>())
            .field("overrides", &self.overrides)
            .finish()
    }
}

/// Result of a single load attempt.
#[derive(Debug)]
pub enum LoadOutcome {
    /// `DOTENV_DISABLED` is set; nothing was read.
    Disabled,
    /// No env file at `path`; build-time defaults apply.
    Absent { path: PathBuf },
    /// The file was read, exported, and forwarded.
    Loaded(LoadedEnv),
    /// Loading failed.
    Failed(EnvLoadError),
}

impl LoadOutcome {
    /// Collapse into a result, treating an absent file as `FileNotFound`.
    pub fn into_result(self) -> Result<Option<LoadedEnv>, EnvLoadError> {
        match self {
            LoadOutcome::Disabled => Ok(None),
            LoadOutcome::Absent { path } => Err(EnvLoadError::FileNotFound { path }),
            LoadOutcome::Loaded(loaded) => Ok(Some(loaded)),
            LoadOutcome::Failed(e) => Err(e),
        }
    }
}

/// Loader for the runtime env file.
#[derive(Debug, Clone)]
pub struct EnvLoader {
    packaging: Packaging,
    file_name: String,
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLoader {
    /// Create a loader for `.env.local` with detected packaging.
    pub fn new() -> Self {
        Self::for_packaging(Packaging::detect())
    }

    /// Create a loader for `.env.local` with a known packaging state.
    pub fn for_packaging(packaging: Packaging) -> Self {
        Self {
            packaging,
            file_name: ENV_FILE_NAME.to_string(),
        }
    }

    /// Override the env file name (primarily for testing).
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn packaging(&self) -> &Packaging {
        &self.packaging
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Resolved path of the env file.
    pub fn env_file_path(&self) -> Result<PathBuf, EnvLoadError> {
        self.packaging.env_file_path(&self.file_name)
    }

    /// Check if loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Read and parse the env file without side effects.
    ///
    /// Returns the resolved path, with `None` in place of the map when the
    /// file does not exist.
    pub fn read(&self) -> Result<(PathBuf, Option<EnvMap>), EnvLoadError> {
        let path = self.env_file_path()?;
        if !file_exists(&path)? {
            return Ok((path, None));
        }
        let vars = read_env_file(&path)?;
        Ok((path, Some(vars)))
    }

    /// Run one load attempt: read, export, and forward to `sink`.
    pub fn load(&self, sink: &mut dyn SettingsSink) -> LoadOutcome {
        if Self::dotenv_disabled() {
            tracing::debug!("{} is set, skipping runtime env file", DOTENV_DISABLED_VAR);
            return LoadOutcome::Disabled;
        }

        let (path, vars) = match self.read() {
            Ok((path, Some(vars))) => (path, vars),
            Ok((path, None)) => {
                tracing::info!(
                    path = %path.display(),
                    "Runtime env file not found, using build-time defaults"
                );
                return LoadOutcome::Absent { path };
            }
            Err(e) => return LoadOutcome::Failed(e),
        };

        match apply(&vars, sink) {
            Ok(overrides) => {
                let keys: Vec<&str> = vars.keys().map(String::as_str).collect();
                tracing::info!(
                    path = %path.display(),
                    keys = %keys.join(", "),
                    "Runtime environment variables loaded"
                );
                LoadOutcome::Loaded(LoadedEnv {
                    path,
                    vars,
                    overrides,
                })
            }
            Err(e) => LoadOutcome::Failed(e),
        }
    }
}

fn file_exists(path: &Path) -> Result<bool, EnvLoadError> {
    path.try_exists().map_err(|e| EnvLoadError::Read {
        path: path.to_path_buf(),
        kind: e.kind(),
    })
}

fn read_env_file(path: &Path) -> Result<EnvMap, EnvLoadError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EnvLoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        kind => EnvLoadError::Read {
            path: path.to_path_buf(),
            kind,
        },
    })?;
    let vars = parse_env(&content);
    tracing::debug!(count = vars.len(), "Parsed runtime env file");
    Ok(vars)
}

fn apply(vars: &EnvMap, sink: &mut dyn SettingsSink) -> Result<RuntimeOverrides, EnvLoadError> {
    export_vars(vars)?;
    let overrides = RuntimeOverrides::from_vars(vars)?;
    overrides.apply(sink)?;
    Ok(overrides)
}

/// Export every variable to the process environment, overriding existing values.
fn export_vars(vars: &EnvMap) -> Result<(), EnvLoadError> {
    if let Some(key) = vars
        .iter()
        .find(|(key, value)| key.contains('\0') || value.contains('\0'))
        .map(|(key, _)| key)
    {
        return Err(EnvLoadError::InvalidVariable {
            key: key.replace('\0', "\\0"),
        });
    }

    for (key, value) in vars {
        // SAFETY: runs on the startup thread before other threads read the
        // environment. Keys are non-empty and contain neither `=` nor NUL.
        unsafe {
            std::env::set_var(key, value);
        }
    }
    Ok(())
}

static LAST_LOAD_ERROR: Mutex<Option<Arc<EnvLoadError>>> = Mutex::new(None);

fn set_last_load_error(error: Option<EnvLoadError>) {
    *LAST_LOAD_ERROR
        .lock()
        .unwrap_or_else(PoisonError::into_inner) = error.map(Arc::new);
}

/// Error from the most recent load attempt, if it failed.
pub fn last_load_error() -> Option<Arc<EnvLoadError>> {
    LAST_LOAD_ERROR
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Load `.env.local` into the process environment and the global settings.
///
/// Never fails: on error, `None` is returned and the error is available from
/// `last_load_error()`. Also returns `None` when `DOTENV_DISABLED` is set.
pub fn load_environment() -> Option<LoadedEnv> {
    load_environment_with(&EnvLoader::new(), &mut GlobalSettings)
}

/// Like `load_environment`, with an explicit loader and settings sink.
pub fn load_environment_with(
    loader: &EnvLoader,
    sink: &mut dyn SettingsSink,
) -> Option<LoadedEnv> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| loader.load(sink))).unwrap_or_else(
        |payload| {
            LoadOutcome::Failed(EnvLoadError::Panicked {
                message: panic_message(payload.as_ref()),
            })
        },
    );

    match outcome.into_result() {
        Ok(loaded) => {
            set_last_load_error(None);
            loaded
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load runtime environment variables");
            set_last_load_error(Some(e));
            None
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown error loading runtime environment variables".to_string()
    }
}
