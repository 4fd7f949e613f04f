//! Configuration data types for stepmatch.

use clap::ValueEnum;
use ortho_config::{OrthoConfig, OrthoResult, PostMergeContext, PostMergeHook};
use serde::{Deserialize, Serialize};

/// Directory searched for feature files when none is configured.
pub const DEFAULT_FEATURES_DIR: &str = "features";

/// Log verbosity for the `tracing` subscriber.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings, including undefined steps.
    #[default]
    Warn,
    /// Feature and scenario progress.
    Info,
    /// Registration and resolution detail.
    Debug,
    /// Rejected captures.
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

/// Runner switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Stop after the first scenario that does not pass.
    pub stop_on_failure: bool,

    /// Resolve steps without invoking handlers.
    pub dry_run: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level written to stderr.
    pub level: LogLevel,
}

/// Root application configuration.
///
/// Loaded with layered precedence (lowest to highest): defaults,
/// configuration file, environment variables, command-line arguments.
///
/// Configuration files are discovered in this order:
/// 1. Path specified via `STEPMATCH_CONFIG_PATH` environment variable
/// 2. `.stepmatch.toml` in the current working directory
/// 3. `.stepmatch.toml` in the home directory
/// 4. `~/.config/stepmatch/config.toml` (XDG default)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(
    prefix = "STEPMATCH",
    post_merge_hook,
    discovery(
        app_name = "stepmatch",
        env_var = "STEPMATCH_CONFIG_PATH",
        config_file_name = "config.toml",
        dotfile_name = ".stepmatch.toml",
        config_cli_long = "config",
        config_cli_visible = true,
    )
)]
pub struct AppConfig {
    /// Directory searched for `*.feature` files.
    pub features_dir: Option<String>,

    /// Runner configuration.
    #[serde(default)]
    #[ortho_config(skip_cli)]
    pub runner: RunnerConfig,

    /// Logging configuration.
    #[serde(default)]
    #[ortho_config(skip_cli)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Returns the configured features directory or [`DEFAULT_FEATURES_DIR`]
    /// when it is unset or blank.
    #[must_use]
    pub fn features_dir(&self) -> &str {
        self.features_dir
            .as_deref()
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or(DEFAULT_FEATURES_DIR)
    }
}

impl PostMergeHook for AppConfig {
    fn post_merge(&mut self, _ctx: &PostMergeContext) -> OrthoResult<()> {
        if self
            .features_dir
            .as_deref()
            .is_some_and(|dir| dir.trim().is_empty())
        {
            self.features_dir = None;
        }
        Ok(())
    }
}
