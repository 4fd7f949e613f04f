//! Word placeholders (`{name:w}`).

use crate::context::{ExecutionContext, Value};
use crate::error::PatternError;
use crate::pattern::StepArgs;
use crate::registry::{Handler, HandlerResult, Keyword, Registry, ensure};

use super::field;

/// Registers the user steps.
///
/// # Errors
///
/// Returns [`PatternError`] if a pattern fails to compile.
pub fn register(registry: &mut Registry) -> Result<(), PatternError> {
    registry.register(
        Keyword::Given,
        "a user named {name:w}",
        &Handler::new("step_given_user", step_given_user),
    )?;
    registry.register(
        Keyword::When,
        "the user changes their name to {new_name:w}",
        &Handler::new("step_when_change_name", step_when_change_name),
    )?;
    registry.register(
        Keyword::Then,
        "the user name is {expected_name:w}",
        &Handler::new("step_then_user_name", step_then_user_name),
    )?;
    Ok(())
}

fn step_given_user(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    context.set("user", Value::record([("name", args.text("name")?)]));
    Ok(())
}

fn step_when_change_name(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    let new_name = args.text("new_name")?;
    context
        .record_mut("user")?
        .insert(String::from("name"), Value::from(new_name));
    Ok(())
}

fn step_then_user_name(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    let expected = args.text("expected_name")?;
    let user = context.record("user")?;
    let actual = field(user, "user", "name")?.as_text("user.name")?;
    ensure(actual == expected, || {
        format!("Expected user name {expected:?}, got {actual:?}")
    })
}
