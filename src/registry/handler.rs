//! Step handlers.

use std::fmt;
use std::sync::Arc;

use crate::context::ExecutionContext;
use crate::error::HandlerError;
use crate::pattern::StepArgs;

/// Result returned by a step handler.
pub type HandlerResult = Result<(), HandlerError>;

type HandlerFn = dyn Fn(&mut ExecutionContext, &StepArgs) -> HandlerResult + Send + Sync;

/// A named step function.
///
/// Handlers are cheap to clone; every clone refers to the same function, so
/// registering one handler under several patterns yields bindings that all
/// point at it.
#[derive(Clone)]
pub struct Handler {
    name: &'static str,
    func: Arc<HandlerFn>,
}

impl Handler {
    /// Wraps `func` under the given name.
    pub fn new<F>(name: &'static str, func: F) -> Self
    where
        F: Fn(&mut ExecutionContext, &StepArgs) -> HandlerResult + Send + Sync + 'static,
    {
        Self {
            name,
            func: Arc::new(func),
        }
    }

    /// Returns the handler name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the handler.
    ///
    /// # Errors
    ///
    /// Propagates the handler's [`HandlerError`].
    pub fn call(&self, context: &mut ExecutionContext, args: &StepArgs) -> HandlerResult {
        (self.func)(context, args)
    }

    /// Returns whether both values refer to the same function.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").field("name", &self.name).finish()
    }
}

/// Fails with an assertion error unless `condition` holds.
///
/// The message is only built on failure.
///
/// # Errors
///
/// Returns [`HandlerError::Assertion`] when `condition` is false.
pub fn ensure(condition: bool, message: impl FnOnce() -> String) -> HandlerResult {
    if condition {
        Ok(())
    } else {
        Err(HandlerError::assertion(message()))
    }
}
