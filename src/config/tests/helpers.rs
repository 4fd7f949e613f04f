//! Shared fixtures and helper functions for config tests.

use crate::config::{AppConfig, LogLevel};
use ortho_config::MergeComposer;
use rstest::fixture;
use std::sync::Arc;

/// Fixture providing an `AppConfig` parsed from a full TOML example.
#[fixture]
pub fn app_config_from_full_toml() -> AppConfig {
    let toml = r#"
        features_dir = "specs/features"

        [runner]
        stop_on_failure = true
        dry_run = true

        [logging]
        level = "debug"
    "#;

    toml::from_str(toml).expect("TOML parsing should succeed")
}

/// Fixture providing an `AppConfig` parsed from a minimal TOML example.
#[fixture]
pub fn app_config_from_partial_toml() -> AppConfig {
    let toml = r#"
        [runner]
        dry_run = true
    "#;

    toml::from_str(toml).expect("TOML parsing should succeed")
}

/// Helper: Creates a `MergeComposer` with defaults layer already pushed.
pub fn create_composer_with_defaults() -> Result<MergeComposer, serde_json::Error> {
    let mut composer = MergeComposer::new();
    let defaults = ortho_config::serde_json::to_value(AppConfig::default())?;
    composer.push_defaults(defaults);
    Ok(composer)
}

/// Helper: Merges layers from a composer into `AppConfig`.
pub fn merge_config(composer: MergeComposer) -> Result<AppConfig, Arc<ortho_config::OrthoError>> {
    AppConfig::merge_from_layers(composer.layers())
}

/// Helper: Asserts that a config has all default values.
pub fn assert_config_has_defaults(config: &AppConfig) {
    assert!(config.features_dir.is_none(), "features_dir should be None");
    assert_eq!(config.features_dir(), "features");
    assert!(
        !config.runner.stop_on_failure,
        "runner.stop_on_failure should be false"
    );
    assert!(!config.runner.dry_run, "runner.dry_run should be false");
    assert_eq!(
        config.logging.level,
        LogLevel::Warn,
        "logging.level should be warn"
    );
}

/// Helper: Creates a `MergeComposer` with defaults, file, and env layers.
pub fn create_composer_with_file_and_env() -> Result<MergeComposer, serde_json::Error> {
    use ortho_config::serde_json::json;

    let mut composer = create_composer_with_defaults()?;

    composer.push_file(
        json!({
            "features_dir": "from-file",
            "logging": { "level": "info" }
        }),
        None,
    );

    composer.push_environment(json!({
        "features_dir": "from-env"
    }));

    Ok(composer)
}
