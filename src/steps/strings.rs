//! Steps with quotes, regex-significant characters and doc strings.

use crate::context::ExecutionContext;
use crate::error::PatternError;
use crate::pattern::StepArgs;
use crate::registry::{Handler, HandlerResult, Keyword, Registry, ensure};

/// Registers the string steps.
///
/// `step_given_value` and `step_then_value_equals` are each registered twice,
/// once per quote style.
///
/// # Errors
///
/// Returns [`PatternError`] if a pattern fails to compile.
pub fn register(registry: &mut Registry) -> Result<(), PatternError> {
    // Characters that would be syntax in a regular expression
    registry.register(
        Keyword::Given,
        "a file named {filename} exists",
        &Handler::new("step_given_file", step_given_file),
    )?;
    registry.register(
        Keyword::When,
        "I search for pattern {pattern}",
        &Handler::new("step_when_search", step_when_search),
    )?;
    registry.register(
        Keyword::Then,
        "the result contains {count:d} matches",
        &Handler::new("step_then_matches", step_then_matches),
    )?;

    // Double quotes
    registry.register(
        Keyword::Given,
        r#"the message is "{message}""#,
        &Handler::new("step_given_message_double", store_message),
    )?;
    registry.register(
        Keyword::Then,
        r#"the output shows "{expected}""#,
        &Handler::new("step_then_output_double", check_output),
    )?;

    // Single quotes
    registry.register(
        Keyword::Given,
        "the message is '{message}'",
        &Handler::new("step_given_message_single", store_message),
    )?;
    registry.register(
        Keyword::Then,
        "the output shows '{expected}'",
        &Handler::new("step_then_output_single", check_output),
    )?;

    // One handler, both quote styles
    let given_value = Handler::new("step_given_value", step_given_value);
    registry.register(Keyword::Given, r#"the value is "{value}""#, &given_value)?;
    registry.register(Keyword::Given, "the value is '{value}'", &given_value)?;

    let then_value = Handler::new("step_then_value_equals", step_then_value_equals);
    registry.register(Keyword::Then, r#"the value equals "{expected}""#, &then_value)?;
    registry.register(Keyword::Then, "the value equals '{expected}'", &then_value)?;

    // Doc strings
    registry.register(
        Keyword::Given,
        "a sample text loaded into the system",
        &Handler::new("step_given_sample_text", step_given_sample_text),
    )?;
    registry.register(
        Keyword::Then,
        "the system processes the text",
        &Handler::new("step_then_process_text", step_then_process_text),
    )?;
    Ok(())
}

fn step_given_file(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    context.set("filename", args.text("filename")?);
    Ok(())
}

fn step_when_search(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    context.set("pattern", args.text("pattern")?);
    Ok(())
}

fn step_then_matches(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    context.set("match_count", args.int("count")?);
    Ok(())
}

fn store_message(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    context.set("message", args.text("message")?);
    Ok(())
}

fn check_output(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    let expected = args.text("expected")?;
    let actual = context.text("message")?;
    ensure(actual == expected, || {
        format!("Expected output {expected:?}, got {actual:?}")
    })
}

fn step_given_value(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    context.set("value", args.text("value")?);
    Ok(())
}

fn step_then_value_equals(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    let expected = args.text("expected")?;
    let actual = context.text("value")?;
    ensure(actual == expected, || {
        format!("Expected value {expected:?}, got {actual:?}")
    })
}

fn step_given_sample_text(context: &mut ExecutionContext, _args: &StepArgs) -> HandlerResult {
    match context.step_text().map(str::to_owned) {
        Some(text) => {
            context.set("text_content", text);
        }
        None => {
            context.remove("text_content");
        }
    }
    Ok(())
}

fn step_then_process_text(context: &mut ExecutionContext, _args: &StepArgs) -> HandlerResult {
    ensure(context.contains("text_content"), || {
        String::from("no text was loaded into the system")
    })
}
