//! Per-scenario execution context.
//!
//! Step handlers share state through an [`ExecutionContext`]: a mapping from
//! attribute names to tagged [`Value`]s. Typed accessors fail with a
//! [`ValueError`] naming the attribute and both kinds when the stored value
//! has a different shape, so handlers can propagate the mismatch with `?`.

mod value;


use std::collections::BTreeMap;

pub use value::{Record, Value};

use crate::error::ValueError;

/// Mutable attribute store passed to every handler of one scenario.
///
/// A context is created fresh for each scenario and discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionContext {
    attributes: BTreeMap<String, Value>,
    step_text: Option<String>,
}

impl ExecutionContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name`, returning the previous value if any.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Returns the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns whether a value is stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Removes and returns the value stored under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.attributes.remove(name)
    }

    /// Iterates over the stored attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the integer stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if the attribute is missing or not an integer.
    pub fn int(&self, name: &str) -> Result<i64, ValueError> {
        self.require(name)?.as_int(name)
    }

    /// Returns the float stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if the attribute is missing or not a float.
    pub fn float(&self, name: &str) -> Result<f64, ValueError> {
        self.require(name)?.as_float(name)
    }

    /// Returns the text stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if the attribute is missing or not text.
    pub fn text(&self, name: &str) -> Result<&str, ValueError> {
        self.require(name)?.as_text(name)
    }

    /// Returns the boolean stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if the attribute is missing or not a boolean.
    pub fn flag(&self, name: &str) -> Result<bool, ValueError> {
        self.require(name)?.as_flag(name)
    }

    /// Returns the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if the attribute is missing or not a record.
    pub fn record(&self, name: &str) -> Result<&Record, ValueError> {
        self.require(name)?.as_record(name)
    }

    /// Returns a mutable reference to the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if the attribute is missing or not a record.
    pub fn record_mut(&mut self, name: &str) -> Result<&mut Record, ValueError> {
        match self.attributes.get_mut(name) {
            Some(Value::Record(record)) => Ok(record),
            Some(other) => Err(ValueError::KindMismatch {
                name: name.to_owned(),
                expected: "record",
                found: other.kind(),
            }),
            None => Err(missing(name)),
        }
    }

    /// Returns the doc string attached to the step being executed.
    #[must_use]
    pub fn step_text(&self) -> Option<&str> {
        self.step_text.as_deref()
    }

    /// Replaces the doc string exposed to the next handler.
    pub fn set_step_text(&mut self, text: Option<String>) {
        self.step_text = text;
    }

    fn require(&self, name: &str) -> Result<&Value, ValueError> {
        self.attributes.get(name).ok_or_else(|| missing(name))
    }
}

fn missing(name: &str) -> ValueError {
    ValueError::Missing {
        name: name.to_owned(),
    }
}
