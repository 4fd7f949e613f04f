//! Layer precedence tests for `MergeComposer` config composition.

use crate::config::tests::helpers::{
    assert_config_has_defaults, create_composer_with_defaults, create_composer_with_file_and_env,
    merge_config,
};
use crate::config::{AppConfig, LogLevel};
use ortho_config::serde_json::json;
use rstest::rstest;

/// Serialised `AppConfig::default()` round-trips through `MergeComposer`, as
/// `load_config` relies on.
#[rstest]
fn layer_precedence_serialised_defaults_round_trip() {
    let composer = create_composer_with_defaults().expect("composer creation should succeed");
    let config = merge_config(composer).expect("merge should succeed");
    assert_eq!(config, AppConfig::default());
}

#[rstest]
fn layer_precedence_defaults_provide_baseline() {
    let composer = create_composer_with_defaults().expect("composer creation should succeed");
    let config = merge_config(composer).expect("merge should succeed");

    assert_config_has_defaults(&config);
}

#[rstest]
fn layer_precedence_file_overrides_defaults() {
    let mut composer = create_composer_with_defaults().expect("composer creation should succeed");
    composer.push_file(
        json!({
            "features_dir": "from-file",
            "runner": { "dry_run": true }
        }),
        None,
    );

    let config = merge_config(composer).expect("merge should succeed");

    assert_eq!(config.features_dir(), "from-file");
    assert!(config.runner.dry_run);
    assert!(!config.runner.stop_on_failure);
}

#[rstest]
fn layer_precedence_env_overrides_file() {
    let composer = create_composer_with_file_and_env().expect("composer creation should succeed");
    let config = merge_config(composer).expect("merge should succeed");

    assert_eq!(config.features_dir(), "from-env");
    // Not in the env layer
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[rstest]
fn layer_precedence_cli_overrides_all() {
    let mut composer =
        create_composer_with_file_and_env().expect("composer creation should succeed");
    composer.push_cli(json!({
        "features_dir": "from-cli"
    }));

    let config = merge_config(composer).expect("merge should succeed");

    assert_eq!(config.features_dir(), "from-cli");
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[rstest]
fn layer_precedence_nested_sections_merge_per_field() {
    let mut composer = create_composer_with_defaults().expect("composer creation should succeed");
    composer.push_file(json!({ "runner": { "stop_on_failure": true } }), None);
    composer.push_environment(json!({ "runner": { "dry_run": true } }));

    let config = merge_config(composer).expect("merge should succeed");

    assert!(config.runner.stop_on_failure);
    assert!(config.runner.dry_run);
}

#[rstest]
fn blank_features_dir_falls_back_to_default() {
    let mut composer = create_composer_with_defaults().expect("composer creation should succeed");
    composer.push_environment(json!({ "features_dir": "  " }));

    let config = merge_config(composer).expect("merge should succeed");

    assert_eq!(config.features_dir(), "features");
}
