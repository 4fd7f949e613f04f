//! Given/when steps for step resolution scenarios.

use std::sync::Arc;

use rstest_bdd_macros::{given, when};
use stepmatch::api::resolve_step;
use stepmatch::registry::{Keyword, Registry};

use super::StepResult;
use super::state::ResolutionState;

fn registry(resolution_state: &ResolutionState) -> StepResult<Arc<Registry>> {
    resolution_state
        .registry
        .get()
        .ok_or_else(|| String::from("registry should be built"))
}

#[given("the built-in step registry")]
fn given_builtin_registry(resolution_state: &ResolutionState) -> StepResult<()> {
    let registry = stepmatch::steps::registry().map_err(|e| e.to_string())?;
    resolution_state.registry.set(Arc::new(registry));
    Ok(())
}

#[when("the {keyword} sentence \"{sentence}\" is resolved")]
fn when_sentence_resolved(
    resolution_state: &ResolutionState,
    keyword: Keyword,
    sentence: String,
) -> StepResult<()> {
    let registry = registry(resolution_state)?;
    let candidates = resolve_step(&registry, keyword, &sentence);
    resolution_state.candidates.set(candidates);
    Ok(())
}

#[when("the {keyword} sentence \"{sentence}\" is invoked")]
fn when_sentence_invoked(
    resolution_state: &ResolutionState,
    keyword: Keyword,
    sentence: String,
) -> StepResult<()> {
    let registry = registry(resolution_state)?;
    let mut context = resolution_state.context.get().unwrap_or_default();
    if let Err(error) = registry.invoke(keyword, &sentence, &mut context) {
        resolution_state.failure.set(error.to_string());
    }
    resolution_state.context.set(context);
    Ok(())
}
