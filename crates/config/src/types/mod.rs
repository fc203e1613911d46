//! Configuration type definitions for the runtime environment loader.
//!
//! Responsibilities:
//! - Define the deployment stage enum shared by the loader and settings.
//!
//! Does NOT handle:
//! - Loading values from files (see `loader` module).
//! - Holding the process-wide settings (see `settings` module).

mod stage;

pub use stage::{DeploymentStage, UnknownStage};
