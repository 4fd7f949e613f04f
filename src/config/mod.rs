//! Configuration system for stepmatch.
//!
//! This module provides the configuration structures and CLI definitions for
//! the stepmatch binary. Layers are merged with `ortho_config`: CLI flags
//! override environment variables, which override configuration files, which
//! override defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! features_dir = "features"
//!
//! [runner]
//! stop_on_failure = false
//! dry_run = false
//!
//! [logging]
//! level = "warn"
//! ```

mod cli;
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use cli::{Cli, Commands, ResolveArgs, RunArgs};
pub use loader::{CONFIG_PATH_ENV_VAR, env_var_names, load_config, load_config_with_env};
pub use types::{AppConfig, DEFAULT_FEATURES_DIR, LogLevel, LoggingConfig, RunnerConfig};
