//! Assertion helpers for step resolution behavioural tests.

use rstest_bdd_macros::then;
use stepmatch::api::Candidate;
use stepmatch::registry::Keyword;

use super::StepResult;
use super::state::ResolutionState;

fn candidates(resolution_state: &ResolutionState) -> StepResult<Vec<Candidate>> {
    resolution_state
        .candidates
        .get()
        .ok_or_else(|| String::from("sentence should be resolved"))
}

#[then("{count} candidates are found")]
fn candidate_count(resolution_state: &ResolutionState, count: usize) -> StepResult<()> {
    let found = candidates(resolution_state)?;
    if found.len() == count {
        Ok(())
    } else {
        Err(format!("expected {count} candidates, got {found:?}"))
    }
}

#[then("every candidate uses handler {handler}")]
fn every_candidate_uses(resolution_state: &ResolutionState, handler: String) -> StepResult<()> {
    let found = candidates(resolution_state)?;
    match found.iter().find(|candidate| candidate.handler != handler) {
        None => Ok(()),
        Some(other) => Err(format!("expected handler {handler}, got {other}")),
    }
}

#[then("the first candidate is registered under {keyword}")]
fn first_candidate_keyword(resolution_state: &ResolutionState, keyword: Keyword) -> StepResult<()> {
    let found = candidates(resolution_state)?;
    let first = found
        .first()
        .ok_or_else(|| String::from("expected at least one candidate"))?;
    if first.keyword == keyword {
        Ok(())
    } else {
        Err(format!("expected keyword {keyword}, got {}", first.keyword))
    }
}

#[then("the first candidate extracted {arguments}")]
fn first_candidate_arguments(
    resolution_state: &ResolutionState,
    arguments: String,
) -> StepResult<()> {
    let found = candidates(resolution_state)?;
    let first = found
        .first()
        .ok_or_else(|| String::from("expected at least one candidate"))?;
    if first.arguments == arguments {
        Ok(())
    } else {
        Err(format!("expected arguments {arguments}, got {}", first.arguments))
    }
}

#[then("no step has failed")]
fn no_step_failed(resolution_state: &ResolutionState) -> StepResult<()> {
    match resolution_state.failure.get() {
        None => Ok(()),
        Some(message) => Err(format!("expected no failure, got: {message}")),
    }
}

#[then("the failure message is \"{message}\"")]
fn failure_message(resolution_state: &ResolutionState, message: String) -> StepResult<()> {
    let actual = resolution_state
        .failure
        .get()
        .ok_or_else(|| String::from("expected a failure"))?;
    if actual == message {
        Ok(())
    } else {
        Err(format!("expected failure {message:?}, got {actual:?}"))
    }
}

#[then("the context integer {name} is {value}")]
fn context_integer(resolution_state: &ResolutionState, name: String, value: i64) -> StepResult<()> {
    let context = resolution_state
        .context
        .get()
        .ok_or_else(|| String::from("context should be set"))?;
    let actual = context.int(&name).map_err(|e| e.to_string())?;
    if actual == value {
        Ok(())
    } else {
        Err(format!("expected {name} to be {value}, got {actual}"))
    }
}
