//! Behavioural tests for parsing and running feature text.

mod bdd_feature_runner_helpers;

use bdd_feature_runner_helpers::{RunnerState, runner_state};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/feature_runner.feature",
    name = "A passing scenario reports every step"
)]
fn passing_scenario_reports_every_step(runner_state: RunnerState) {
    let _ = runner_state;
}

#[scenario(
    path = "tests/features/feature_runner.feature",
    name = "A failing step skips the rest of its scenario only"
)]
fn failing_step_skips_rest_of_scenario(runner_state: RunnerState) {
    let _ = runner_state;
}

#[scenario(
    path = "tests/features/feature_runner.feature",
    name = "Stop on failure ends the run early"
)]
fn stop_on_failure_ends_run_early(runner_state: RunnerState) {
    let _ = runner_state;
}

#[scenario(
    path = "tests/features/feature_runner.feature",
    name = "Dry run never invokes handlers"
)]
fn dry_run_never_invokes_handlers(runner_state: RunnerState) {
    let _ = runner_state;
}

#[scenario(
    path = "tests/features/feature_runner.feature",
    name = "Malformed feature text is rejected"
)]
fn malformed_feature_text_is_rejected(runner_state: RunnerState) {
    let _ = runner_state;
}
