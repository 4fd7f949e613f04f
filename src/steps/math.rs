//! Integer, float and multi-placeholder arithmetic steps.

use crate::context::{ExecutionContext, Value};
use crate::error::{HandlerError, PatternError};
use crate::pattern::StepArgs;
use crate::registry::{Handler, HandlerResult, Keyword, Registry, ensure};

use super::field;

/// Largest difference accepted when comparing prices.
pub const PRICE_TOLERANCE: f64 = 0.01;

/// Registers the arithmetic steps.
///
/// # Errors
///
/// Returns [`PatternError`] if a pattern fails to compile.
pub fn register(registry: &mut Registry) -> Result<(), PatternError> {
    // Integers
    registry.register(
        Keyword::Given,
        "the first number is {number:d}",
        &Handler::new("step_given_first_number", step_given_first_number),
    )?;
    registry.register(
        Keyword::When,
        "I add {number:d}",
        &Handler::new("step_when_add", step_when_add),
    )?;
    registry.register(
        Keyword::Then,
        "the result is {number:d}",
        &Handler::new("step_then_result", step_then_result),
    )?;

    // Floats
    registry.register(
        Keyword::Given,
        "the price is {price:f}",
        &Handler::new("step_given_price", step_given_price),
    )?;
    registry.register(
        Keyword::When,
        "I apply a discount of {percent:f} percent",
        &Handler::new("step_when_discount", step_when_discount),
    )?;
    registry.register(
        Keyword::Then,
        "the final price is {expected:f}",
        &Handler::new("step_then_final_price", step_then_final_price),
    )?;

    // Several placeholders in one sentence
    registry.register(
        Keyword::Given,
        "a rectangle with width {width:d} and height {height:d}",
        &Handler::new("step_given_rectangle", step_given_rectangle),
    )?;
    registry.register(
        Keyword::When,
        "I calculate the area",
        &Handler::new("step_when_calculate_area", step_when_calculate_area),
    )?;
    registry.register(
        Keyword::Then,
        "the area is {expected:d}",
        &Handler::new("step_then_area", step_then_area),
    )?;
    Ok(())
}

/// Stores `number` as `first_number`.
///
/// # Errors
///
/// Fails if `number` is not an integer.
pub fn step_given_first_number(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    context.set("first_number", args.int("number")?);
    Ok(())
}

/// Stores `first_number + number` as `result`.
///
/// # Errors
///
/// Fails if `first_number` is missing or the sum overflows.
pub fn step_when_add(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    let first = context.int("first_number")?;
    let number = args.int("number")?;
    let sum = first
        .checked_add(number)
        .ok_or_else(|| HandlerError::assertion(format!("{first} + {number} overflows")))?;
    context.set("result", sum);
    Ok(())
}

/// Checks that `result` equals `number`.
///
/// # Errors
///
/// Fails if `result` is missing or differs.
pub fn step_then_result(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    let expected = args.int("number")?;
    let actual = context.int("result")?;
    ensure(actual == expected, || {
        format!("Expected {expected}, got {actual}")
    })
}

fn step_given_price(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    context.set("price", args.float("price")?);
    Ok(())
}

#[expect(
    clippy::float_arithmetic,
    reason = "discounts are computed on floating-point prices"
)]
fn step_when_discount(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    let price = context.float("price")?;
    let percent = args.float("percent")?;
    context.set("price", price * (1.0 - percent / 100.0));
    Ok(())
}

#[expect(
    clippy::float_arithmetic,
    reason = "prices are compared within a tolerance"
)]
fn step_then_final_price(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    let expected = args.float("expected")?;
    let actual = context.float("price")?;
    ensure((actual - expected).abs() < PRICE_TOLERANCE, || {
        format!("Expected {expected}, got {actual}")
    })
}

fn step_given_rectangle(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    let rectangle = Value::record([
        ("width", args.int("width")?),
        ("height", args.int("height")?),
    ]);
    context.set("rectangle", rectangle);
    Ok(())
}

fn step_when_calculate_area(context: &mut ExecutionContext, _args: &StepArgs) -> HandlerResult {
    let rectangle = context.record("rectangle")?;
    let width = field(rectangle, "rectangle", "width")?.as_int("rectangle.width")?;
    let height = field(rectangle, "rectangle", "height")?.as_int("rectangle.height")?;
    let area = width
        .checked_mul(height)
        .ok_or_else(|| HandlerError::assertion(format!("{width} x {height} overflows")))?;
    context.set("area", area);
    Ok(())
}

fn step_then_area(context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
    let expected = args.int("expected")?;
    let actual = context.int("area")?;
    ensure(actual == expected, || {
        format!("Expected area {expected}, got {actual}")
    })
}
