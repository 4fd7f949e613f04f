//! Wildcard steps and a sentence registered under two keywords.

use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::context::ExecutionContext;
use crate::error::{HandlerError, PatternError};
use crate::pattern::StepArgs;
use crate::registry::{Handler, HandlerResult, Keyword, Registry};

/// Registers the common steps.
///
/// "a logged in user" is registered under both `given` and the wildcard: a
/// `Given` line resolves to the `given` binding, any other keyword falls back
/// to the wildcard one.
///
/// # Errors
///
/// Returns [`PatternError`] if a pattern fails to compile.
pub fn register(registry: &mut Registry) -> Result<(), PatternError> {
    registry.register(
        Keyword::Step,
        "I wait for {seconds:d} seconds",
        &Handler::new("step_wait", step_wait),
    )?;
    registry.register(
        Keyword::Step,
        "the system is ready",
        &Handler::new("step_system_ready", step_system_ready),
    )?;
    registry.register(
        Keyword::Given,
        "a logged in user",
        &Handler::new("step_given_logged_in_user", step_given_logged_in_user),
    )?;
    registry.register(
        Keyword::Step,
        "a logged in user",
        &Handler::new("step_any_logged_in_user", step_any_logged_in_user),
    )?;
    Ok(())
}

/// Blocks the calling thread for the requested number of seconds.
fn step_wait(_context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    let seconds = args.int("seconds")?;
    let duration = u64::try_from(seconds)
        .map(Duration::from_secs)
        .map_err(|_| HandlerError::assertion(format!("cannot wait for {seconds} seconds")))?;
    debug!(?duration, "waiting");
    thread::sleep(duration);
    Ok(())
}

fn step_system_ready(context: &mut ExecutionContext, _args: &StepArgs) -> HandlerResult {
    context.set("system_ready", true);
    Ok(())
}

fn step_given_logged_in_user(context: &mut ExecutionContext, _args: &StepArgs) -> HandlerResult {
    context.set("user_logged_in", true);
    context.set("login_source", "given");
    Ok(())
}

fn step_any_logged_in_user(context: &mut ExecutionContext, _args: &StepArgs) -> HandlerResult {
    context.set("user_logged_in", true);
    context.set("login_source", "step");
    Ok(())
}
