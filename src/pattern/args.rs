//! Values extracted from a matched sentence.

use std::fmt;

use crate::context::Value;
use crate::error::ValueError;

/// A placeholder value paired with its name.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    /// The placeholder name.
    pub name: String,
    /// The converted value.
    pub value: Value,
}

/// Placeholder values extracted from one sentence, in pattern order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepArgs {
    arguments: Vec<Argument>,
}

impl StepArgs {
    pub(crate) const fn new(arguments: Vec<Argument>) -> Self {
        Self { arguments }
    }

    /// Returns the number of extracted values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns whether the pattern had no placeholders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the value at `index` in pattern order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.arguments.get(index).map(|argument| &argument.value)
    }

    /// Returns the value captured by the placeholder called `name`.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|argument| argument.name == name)
            .map(|argument| &argument.value)
    }

    /// Iterates over the arguments in pattern order.
    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.arguments.iter()
    }

    /// Returns the integer captured by `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if there is no such placeholder or it did not
    /// capture an integer.
    pub fn int(&self, name: &str) -> Result<i64, ValueError> {
        self.require(name)?.as_int(name)
    }

    /// Returns the float captured by `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if there is no such placeholder or it did not
    /// capture a float.
    pub fn float(&self, name: &str) -> Result<f64, ValueError> {
        self.require(name)?.as_float(name)
    }

    /// Returns the text captured by `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if there is no such placeholder or it did not
    /// capture text.
    pub fn text(&self, name: &str) -> Result<&str, ValueError> {
        self.require(name)?.as_text(name)
    }

    fn require(&self, name: &str) -> Result<&Value, ValueError> {
        self.named(name).ok_or_else(|| ValueError::Missing {
            name: name.to_owned(),
        })
    }
}

impl<'a> IntoIterator for &'a StepArgs {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for StepArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, argument) in self.arguments.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", argument.name, argument.value)?;
        }
        Ok(())
    }
}
