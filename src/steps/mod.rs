//! Built-in step definitions.
//!
//! These bindings are fixtures for editor tooling: they cover typed and untyped
//! placeholders, both quote styles, one handler registered under several
//! patterns, wildcard `step` bindings overlapping `given` ones, and a module
//! ([`basic`]) that registers the same sentences as [`math`] a second time.
//!
//! [`registry`] is the explicit initialisation phase: it builds the registry
//! once at start-up, and the caller owns it until process exit.

pub mod basic;
pub mod common;
pub mod math;
pub mod products;
pub mod strings;
pub mod users;


use tracing::debug;

use crate::context::{Record, Value};
use crate::error::{PatternError, ValueError};
use crate::registry::Registry;

/// Registers every built-in step module in load order.
///
/// # Errors
///
/// Returns the first [`PatternError`] encountered.
pub fn register_all(registry: &mut Registry) -> Result<(), PatternError> {
    common::register(registry)?;
    math::register(registry)?;
    products::register(registry)?;
    basic::register(registry)?;
    strings::register(registry)?;
    users::register(registry)?;
    debug!(bindings = registry.len(), "registered built-in steps");
    Ok(())
}

/// Builds a registry holding every built-in step.
///
/// # Errors
///
/// Returns the first [`PatternError`] encountered.
pub fn registry() -> Result<Registry, PatternError> {
    let mut registry = Registry::new();
    register_all(&mut registry)?;
    Ok(registry)
}

/// Reads a required field of a record stored in the context.
fn field<'r>(record: &'r Record, record_name: &str, key: &str) -> Result<&'r Value, ValueError> {
    record.get(key).ok_or_else(|| ValueError::Missing {
        name: format!("{record_name}.{key}"),
    })
}
