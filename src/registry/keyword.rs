//! Step keywords.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// The role a binding is registered under.
///
/// [`Keyword::Step`] is the wildcard: its bindings are consulted for any
/// sentence keyword when no binding under the sentence's own keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Keyword {
    /// Preconditions.
    Given,
    /// Actions.
    When,
    /// Outcomes.
    Then,
    /// Wildcard matching any sentence keyword.
    Step,
}

impl Keyword {
    /// Every keyword, in catalogue order.
    pub const ALL: [Self; 4] = [Self::Given, Self::When, Self::Then, Self::Step];

    /// Returns the lowercase keyword name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "given",
            Self::When => "when",
            Self::Then => "then",
            Self::Step => "step",
        }
    }

    /// Returns whether this is the wildcard keyword.
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::Step)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown keyword name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown step keyword '{0}'")]
pub struct UnknownKeyword(pub String);

impl FromStr for Keyword {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownKeyword(s.to_owned()))
    }
}
