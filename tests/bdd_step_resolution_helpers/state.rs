//! Scenario state for step resolution behavioural tests.

use std::sync::Arc;

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use stepmatch::api::Candidate;
use stepmatch::context::ExecutionContext;
use stepmatch::registry::Registry;

#[derive(Default, ScenarioState)]
pub(crate) struct ResolutionState {
    pub(crate) registry: Slot<Arc<Registry>>,
    pub(crate) candidates: Slot<Vec<Candidate>>,
    pub(crate) context: Slot<ExecutionContext>,
    pub(crate) failure: Slot<String>,
}

#[fixture]
pub(crate) fn resolution_state() -> ResolutionState {
    let state = ResolutionState::default();
    state.context.set(ExecutionContext::new());
    state
}
