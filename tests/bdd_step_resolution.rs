//! Behavioural tests for step resolution and invocation.

mod bdd_step_resolution_helpers;

use bdd_step_resolution_helpers::{ResolutionState, resolution_state};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/step_resolution.feature",
    name = "Duplicate definitions are all reported"
)]
fn duplicate_definitions_are_all_reported(resolution_state: ResolutionState) {
    let _ = resolution_state;
}

#[scenario(
    path = "tests/features/step_resolution.feature",
    name = "Wildcard steps answer for any keyword"
)]
fn wildcard_steps_answer_for_any_keyword(resolution_state: ResolutionState) {
    let _ = resolution_state;
}

#[scenario(
    path = "tests/features/step_resolution.feature",
    name = "Keyword-specific definitions shadow the wildcard"
)]
fn keyword_specific_definitions_shadow_the_wildcard(resolution_state: ResolutionState) {
    let _ = resolution_state;
}

#[scenario(
    path = "tests/features/step_resolution.feature",
    name = "Typed placeholders reject mismatched text"
)]
fn typed_placeholders_reject_mismatched_text(resolution_state: ResolutionState) {
    let _ = resolution_state;
}

#[scenario(
    path = "tests/features/step_resolution.feature",
    name = "A passing sequence shares one context"
)]
fn passing_sequence_shares_one_context(resolution_state: ResolutionState) {
    let _ = resolution_state;
}

#[scenario(
    path = "tests/features/step_resolution.feature",
    name = "A failing assertion names the step"
)]
fn failing_assertion_names_the_step(resolution_state: ResolutionState) {
    let _ = resolution_state;
}

#[scenario(
    path = "tests/features/step_resolution.feature",
    name = "An unknown sentence is undefined"
)]
fn unknown_sentence_is_undefined(resolution_state: ResolutionState) {
    let _ = resolution_state;
}
