//! Centralized constants for the runtime environment loader.
//!
//! This module contains the file name, recognized keys, and packaging
//! directory names shared by the loader, the settings module, and the CLI.

// =============================================================================
// Environment File
// =============================================================================

/// Fixed name of the runtime environment file.
pub const ENV_FILE_NAME: &str = ".env.local";

/// Setting this variable to `1` or `true` skips runtime env file loading.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Recognized Keys
// =============================================================================

/// Deployment stage name (`development`, `stage`, `production`).
pub const KEY_ENV: &str = "ENV";

/// Base URL applied to every stage; wins over the stage-specific keys.
pub const KEY_CUSTOM_URL: &str = "CUSTOM_URL";

/// Base URL for the production stage.
pub const KEY_PROD_URL: &str = "PROD_URL";

/// Base URL for the stage stage.
pub const KEY_STAGE_URL: &str = "STAGE_URL";

/// Base URL for the development stage.
pub const KEY_DEV_URL: &str = "DEV_URL";

/// Error-reporting DSN.
pub const KEY_SENTRY_DSN: &str = "ASTRA_ELECTRON_SENTRY_DSN";

/// Error-reporting endpoint.
pub const KEY_SENTRY_ENDPOINT: &str = "ASTRA_ELECTRON_SENTRY_ENDPOINT";

// =============================================================================
// Packaging
// =============================================================================

/// Resources directory next to the executable in packaged Linux/Windows builds.
pub const RESOURCES_DIR_NAME: &str = "resources";

/// Resources directory inside a macOS app bundle (`Contents/Resources`).
pub const MACOS_RESOURCES_DIR_NAME: &str = "Resources";
