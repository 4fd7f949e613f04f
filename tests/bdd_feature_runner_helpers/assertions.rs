//! Assertion helpers for feature runner behavioural tests.

use rstest_bdd_macros::then;
use stepmatch::runner::{RunSummary, ScenarioStatus, StepStatus};

use super::StepResult;
use super::state::{RunResult, RunnerState};

fn run_summary(runner_state: &RunnerState) -> StepResult<RunSummary> {
    match runner_state.result.get() {
        Some(RunResult::Ran(summary)) => Ok(summary),
        Some(RunResult::ParseFailed(line)) => Err(format!("parsing failed at line {line}")),
        None => Err(String::from("feature should be run")),
    }
}

fn expect_count(what: &str, expected: usize, actual: usize) -> StepResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(format!("expected {expected} {what}, got {actual}"))
    }
}

#[then("{count} scenarios passed")]
fn scenarios_passed(runner_state: &RunnerState, count: usize) -> StepResult<()> {
    let summary = run_summary(runner_state)?;
    expect_count("passed scenarios", count, summary.count(ScenarioStatus::Passed))
}

#[then("{count} scenarios failed")]
fn scenarios_failed(runner_state: &RunnerState, count: usize) -> StepResult<()> {
    let summary = run_summary(runner_state)?;
    expect_count("failed scenarios", count, summary.count(ScenarioStatus::Failed))
}

#[then("{count} scenarios were untested")]
fn scenarios_untested(runner_state: &RunnerState, count: usize) -> StepResult<()> {
    let summary = run_summary(runner_state)?;
    expect_count("untested scenarios", count, summary.count(ScenarioStatus::Untested))
}

#[then("{count} scenarios were reported")]
fn scenarios_reported(runner_state: &RunnerState, count: usize) -> StepResult<()> {
    let summary = run_summary(runner_state)?;
    expect_count("reported scenarios", count, summary.scenarios().count())
}

#[then("{count} steps were skipped")]
fn steps_skipped(runner_state: &RunnerState, count: usize) -> StepResult<()> {
    let summary = run_summary(runner_state)?;
    let skipped = summary.count_steps(|status| matches!(status, StepStatus::Skipped));
    expect_count("skipped steps", count, skipped)
}

#[then("parsing failed at line {line}")]
fn parsing_failed(runner_state: &RunnerState, line: usize) -> StepResult<()> {
    match runner_state.result.get() {
        Some(RunResult::ParseFailed(actual)) => expect_count("as the failing line", line, actual),
        Some(RunResult::Ran(_)) => Err(String::from("expected a parse error, but the feature ran")),
        None => Err(String::from("feature should be run")),
    }
}
