//! Given/when steps for feature runner scenarios.

use rstest_bdd_macros::{given, when};
use stepmatch::error::FeatureError;
use stepmatch::runner::{Feature, INLINE_PATH, Runner};

use super::StepResult;
use super::state::{RunResult, RunnerState};

const ARITHMETIC: &str = "\
Feature: Arithmetic
  Scenario: Add two numbers
    Given the first number is 5
    When I add 3
    Then the result is 8
";

const MIXED: &str = "\
Feature: Mixed
  Scenario: Broken sum
    Given the first number is 5
    When I add 3
    Then the result is 9
    And the system is ready

  Scenario: Ready system
    Given the system is ready
    Then the system is ready
";

const OUTLINE: &str = "\
Feature: Outlines
  Scenario Outline: Add <n>
    Given the first number is <n>
";

#[given("the sample feature \"{name}\"")]
fn given_sample_feature(runner_state: &RunnerState, name: String) -> StepResult<()> {
    let source = match name.as_str() {
        "arithmetic" => ARITHMETIC,
        "mixed" => MIXED,
        "outline" => OUTLINE,
        other => return Err(format!("unknown sample feature '{other}'")),
    };
    runner_state.source.set(source);
    Ok(())
}

#[given("the runner stops on failure")]
fn given_stop_on_failure(runner_state: &RunnerState) {
    let mut options = runner_state.options.get().unwrap_or_default();
    options.stop_on_failure = true;
    runner_state.options.set(options);
}

#[given("the runner performs a dry run")]
fn given_dry_run(runner_state: &RunnerState) {
    let mut options = runner_state.options.get().unwrap_or_default();
    options.dry_run = true;
    runner_state.options.set(options);
}

#[when("the feature is run")]
fn when_feature_run(runner_state: &RunnerState) -> StepResult<()> {
    let source = runner_state
        .source
        .get()
        .ok_or_else(|| String::from("sample feature should be chosen"))?;
    let options = runner_state.options.get().unwrap_or_default();
    let result = match Feature::parse(INLINE_PATH, source) {
        Ok(feature) => {
            let registry = stepmatch::steps::registry().map_err(|e| e.to_string())?;
            RunResult::Ran(Runner::new(&registry, options).run(&[feature]))
        }
        Err(FeatureError::Parse { line, .. }) => RunResult::ParseFailed(line),
        Err(other) => return Err(other.to_string()),
    };
    runner_state.result.set(result);
    Ok(())
}
