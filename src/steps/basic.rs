//! A second copy of the introductory arithmetic steps.
//!
//! The sentences are identical to the integer steps in [`super::math`] and
//! are bound to separate handlers, so every sentence resolves to two
//! candidates. The registry keeps both; execution uses the one registered
//! first.

use crate::error::PatternError;
use crate::registry::{Handler, Keyword, Registry};

use super::math::{step_given_first_number, step_then_result, step_when_add};

/// Registers the duplicated arithmetic steps.
///
/// # Errors
///
/// Returns [`PatternError`] if a pattern fails to compile.
pub fn register(registry: &mut Registry) -> Result<(), PatternError> {
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
    Ok(())
}
