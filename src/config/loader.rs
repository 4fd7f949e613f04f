//! Configuration loading with layered precedence.
//!
//! Layers are composed by hand with `MergeComposer` rather than through the
//! derived `load()`:
//!
//! 1. **Subcommand separation**: `Cli` owns subcommand dispatch, while
//!    `AppConfig` only holds configuration values.
//! 2. **Environment variable validation**: typed variables such as
//!    `STEPMATCH_RUNNER_DRY_RUN=maybe` fail loading instead of being ignored.
//! 3. **Discovery**: `--config` is honoured before the XDG search paths.
//!
//! String fields (e.g. `STEPMATCH_FEATURES_DIR`) are always accepted.

use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use clap::ValueEnum;
use mockable::{DefaultEnv, Env};
use ortho_config::discovery::ConfigDiscovery;
use ortho_config::serde_json::{self, Map, Value};
use ortho_config::{MergeComposer, toml};
use tracing::debug;

use crate::config::{AppConfig, Cli, Commands, LogLevel};
use crate::error::{ConfigError, Result};

/// The type of value expected from an environment variable.
#[derive(Clone, Copy)]
enum EnvVarType {
    /// String value (always accepted).
    String,
    /// Boolean value (`true`/`false`).
    Bool,
    /// A [`LogLevel`] name, case-insensitive.
    Level,
}

/// Specification for a single environment variable mapping.
struct EnvVarSpec {
    /// The environment variable name.
    env_var: &'static str,
    /// The JSON path segments (e.g. `["runner", "dry_run"]`).
    path: &'static [&'static str],
    /// The expected value type.
    var_type: EnvVarType,
}

/// Every environment variable and its JSON path.
const ENV_VAR_SPECS: &[EnvVarSpec] = &[
    EnvVarSpec {
        env_var: "STEPMATCH_FEATURES_DIR",
        path: &["features_dir"],
        var_type: EnvVarType::String,
    },
    // Runner fields
    EnvVarSpec {
        env_var: "STEPMATCH_RUNNER_STOP_ON_FAILURE",
        path: &["runner", "stop_on_failure"],
        var_type: EnvVarType::Bool,
    },
    EnvVarSpec {
        env_var: "STEPMATCH_RUNNER_DRY_RUN",
        path: &["runner", "dry_run"],
        var_type: EnvVarType::Bool,
    },
    // Logging fields
    EnvVarSpec {
        env_var: "STEPMATCH_LOGGING_LEVEL",
        path: &["logging", "level"],
        var_type: EnvVarType::Level,
    },
];

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV_VAR: &str = "STEPMATCH_CONFIG_PATH";

/// Returns the environment variable names read by the loader.
///
/// Tests use this to clear every `STEPMATCH_*` variable without keeping a
/// second list in sync.
#[must_use]
pub fn env_var_names() -> Vec<&'static str> {
    ENV_VAR_SPECS.iter().map(|spec| spec.env_var).collect()
}

/// Reads a TOML file through `cap_std` and pushes it as the file layer.
fn load_config_file(path: &Utf8PathBuf, composer: &mut MergeComposer) -> Result<()> {
    let current_dir = Utf8PathBuf::from(".");
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| current_dir.as_ref());
    let file_name = path.file_name().unwrap_or(path.as_str());

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| {
        ConfigError::ParseError {
            message: format!("failed to open directory {parent}: {e}"),
        }
    })?;

    let content = dir
        .read_to_string(file_name)
        .map_err(|e| ConfigError::ParseError {
            message: format!("failed to read {path}: {e}"),
        })?;

    let value =
        toml::from_str::<serde_json::Value>(&content).map_err(|e| ConfigError::ParseError {
            message: format!("failed to parse {path}: {e}"),
        })?;

    debug!(%path, "loaded configuration file");
    composer.push_file(value, Some(path.clone()));
    Ok(())
}

/// Loads configuration from the process environment.
///
/// Sources, lowest precedence first:
/// 1. Application defaults
/// 2. Configuration file (`--config`, `STEPMATCH_CONFIG_PATH` or discovery)
/// 3. `STEPMATCH_*` environment variables
/// 4. Command-line arguments
///
/// # Errors
///
/// Returns `ConfigError` for unreadable or malformed configuration files,
/// invalid typed environment values, or a failed merge.
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    load_config_with_env(cli, &DefaultEnv::new())
}

/// Loads configuration, reading environment variables through `env`.
///
/// # Errors
///
/// See [`load_config`].
pub fn load_config_with_env<E: Env>(cli: &Cli, env: &E) -> Result<AppConfig> {
    let mut composer = MergeComposer::new();

    let defaults =
        serde_json::to_value(AppConfig::default()).map_err(|e| ConfigError::ParseError {
            message: format!("failed to serialise defaults: {e}"),
        })?;
    composer.push_defaults(defaults);

    if let Some(ref path) = config_path(cli, env) {
        load_config_file(path, &mut composer)?;
    }

    let env_values = collect_env_vars(env)?;
    if !env_values.is_null() {
        composer.push_environment(env_values);
    }

    let cli_overrides = build_cli_overrides(cli);
    if !cli_overrides.is_null() {
        composer.push_cli(cli_overrides);
    }

    let config =
        AppConfig::merge_from_layers(composer.layers()).map_err(ConfigError::OrthoConfig)?;
    Ok(config)
}

/// Picks the configuration file: `--config`, then `STEPMATCH_CONFIG_PATH`,
/// then the discovery search paths. Only existing files are returned.
fn config_path<E: Env>(cli: &Cli, env: &E) -> Option<Utf8PathBuf> {
    cli.config
        .clone()
        .or_else(|| {
            env.string(CONFIG_PATH_ENV_VAR)
                .filter(|path| !path.is_empty())
                .map(Utf8PathBuf::from)
        })
        .filter(|path| path.exists())
        .or_else(|| {
            let discovery = ConfigDiscovery::builder("stepmatch")
                .config_file_name("config.toml")
                .dotfile_name(".stepmatch.toml")
                .build();
            discovery
                .candidates()
                .into_iter()
                .filter(|path| path.exists())
                .find_map(|path| Utf8PathBuf::try_from(path).ok())
        })
}

/// Collects `STEPMATCH_*` variables into a JSON value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` when a typed variable cannot be parsed.
fn collect_env_vars<E: Env>(env: &E) -> Result<Value> {
    let mut root = Map::new();

    for spec in ENV_VAR_SPECS {
        let Some(raw_value) = env.string(spec.env_var) else {
            continue;
        };

        let json_value = match spec.var_type {
            EnvVarType::String => Value::String(raw_value),
            EnvVarType::Bool => match raw_value.parse::<bool>() {
                Ok(b) => Value::Bool(b),
                Err(_) => {
                    return Err(ConfigError::InvalidValue {
                        field: spec.env_var.to_owned(),
                        reason: format!("expected bool (true/false), got '{raw_value}'"),
                    }
                    .into());
                }
            },
            EnvVarType::Level => match LogLevel::from_str(raw_value.trim(), true) {
                Ok(level) => level_value(level),
                Err(_) => {
                    return Err(ConfigError::InvalidValue {
                        field: spec.env_var.to_owned(),
                        reason: format!(
                            "expected one of error, warn, info, debug, trace, got '{raw_value}'"
                        ),
                    }
                    .into());
                }
            },
        };

        insert_at_path(&mut root, spec.path, json_value);
    }

    if root.is_empty() {
        Ok(Value::Null)
    } else {
        Ok(Value::Object(root))
    }
}

/// Inserts `value` at a nested path, creating intermediate objects.
fn insert_at_path(root: &mut Map<String, Value>, path: &[&str], value: Value) {
    let Some((&field, parents)) = path.split_last() else {
        return;
    };

    let mut current = root;
    for &segment in parents {
        let entry = current
            .entry(segment.to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
        let Some(obj) = entry.as_object_mut() else {
            return;
        };
        current = obj;
    }

    current.insert(field.to_owned(), value);
}

fn level_value(level: LogLevel) -> Value {
    serde_json::to_value(level).unwrap_or(Value::Null)
}

/// Builds the CLI layer from global options and `run` flags.
///
/// Boolean flags only override when set, so `--stop` can turn
/// `stop_on_failure` on but never off.
fn build_cli_overrides(cli: &Cli) -> Value {
    let mut overrides = Map::new();

    if let Some(ref dir) = cli.features_dir {
        overrides.insert(String::from("features_dir"), Value::String(dir.clone()));
    }

    if let Some(level) = cli.log_level {
        insert_at_path(&mut overrides, &["logging", "level"], level_value(level));
    }

    if let Commands::Run(ref args) = cli.command {
        if args.stop {
            insert_at_path(&mut overrides, &["runner", "stop_on_failure"], Value::Bool(true));
        }
        if args.dry_run {
            insert_at_path(&mut overrides, &["runner", "dry_run"], Value::Bool(true));
        }
    }

    if overrides.is_empty() {
        Value::Null
    } else {
        Value::Object(overrides)
    }
}
