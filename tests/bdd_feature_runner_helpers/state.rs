//! Scenario state for feature runner behavioural tests.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use stepmatch::runner::{RunOptions, RunSummary};

/// Result of parsing and running the sample feature.
#[derive(Debug, Clone)]
pub(crate) enum RunResult {
    /// The feature parsed and ran.
    Ran(RunSummary),
    /// Parsing failed at the given line.
    ParseFailed(usize),
}

#[derive(Default, ScenarioState)]
pub(crate) struct RunnerState {
    pub(crate) source: Slot<&'static str>,
    pub(crate) options: Slot<RunOptions>,
    pub(crate) result: Slot<RunResult>,
}

#[fixture]
pub(crate) fn runner_state() -> RunnerState {
    let state = RunnerState::default();
    state.options.set(RunOptions::default());
    state
}
