//! Untyped placeholders capturing free text.

use crate::context::{ExecutionContext, Value};
use crate::error::PatternError;
use crate::pattern::StepArgs;
use crate::registry::{Handler, HandlerResult, Keyword, Registry, ensure};

use super::field;

/// Registers the product steps.
///
/// # Errors
///
/// Returns [`PatternError`] if a pattern fails to compile.
pub fn register(registry: &mut Registry) -> Result<(), PatternError> {
    registry.register(
        Keyword::Given,
        "a product called {product}",
        &Handler::new("step_given_product", step_given_product),
    )?;
    registry.register(
        Keyword::When,
        "I set the description to {description}",
        &Handler::new("step_when_description", step_when_description),
    )?;
    registry.register(
        Keyword::Then,
        "the product description is {expected}",
        &Handler::new("step_then_description", step_then_description),
    )?;
    Ok(())
}

fn step_given_product(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    context.set("product", Value::record([("name", args.text("product")?)]));
    Ok(())
}

fn step_when_description(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    let description = args.text("description")?;
    context
        .record_mut("product")?
        .insert(String::from("description"), Value::from(description));
    Ok(())
}

fn step_then_description(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    let expected = args.text("expected")?;
    let product = context.record("product")?;
    let actual = field(product, "product", "description")?.as_text("product.description")?;
    ensure(actual == expected, || {
        format!("Expected description {expected:?}, got {actual:?}")
    })
}
