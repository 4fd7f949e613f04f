//! Orchestration API for stepmatch commands.
//!
//! One function per command: [`run`], [`resolve_step`] and [`list_steps`].
//! They take library-owned types (not clap types), never print, and leave
//! process exit codes to the CLI adapter through [`CommandOutcome`].

mod run;


pub use run::{RunParams, discover_features, load_features, run};

use std::fmt;

use crate::registry::{Binding, Keyword, Registry};

/// Outcome of a stepmatch command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command completed successfully (exit code 0).
    Success,
    /// The command completed but found failing, undefined or unmatched steps
    /// (exit code 1).
    Failure,
}

impl CommandOutcome {
    /// Maps a boolean result onto an outcome.
    #[must_use]
    pub const fn from_success(success: bool) -> Self {
        if success {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

/// One binding that matches a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Keyword the binding was registered under.
    pub keyword: Keyword,
    /// Pattern source text.
    pub pattern: String,
    /// Handler name.
    pub handler: &'static str,
    /// `file:line` of the registration.
    pub location: String,
    /// Extracted arguments rendered as `name=value, ...`.
    pub arguments: String,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@{}(\"{}\") -> {} at {}",
            self.keyword, self.pattern, self.handler, self.location
        )?;
        if !self.arguments.is_empty() {
            write!(f, " [{}]", self.arguments)?;
        }
        Ok(())
    }
}

fn location(binding: &Binding) -> String {
    let location = binding.location();
    format!("{}:{}", location.file(), location.line())
}

/// Lists every binding `sentence` resolves to under `keyword`, in
/// registration order. The first entry is the one [`run`] would invoke.
#[must_use]
pub fn resolve_step(registry: &Registry, keyword: Keyword, sentence: &str) -> Vec<Candidate> {
    registry
        .resolve(keyword, sentence)
        .into_iter()
        .map(|resolution| Candidate {
            keyword: resolution.binding.keyword(),
            pattern: resolution.binding.pattern().as_str().to_owned(),
            handler: resolution.binding.handler().name(),
            location: location(resolution.binding),
            arguments: resolution.args.to_string(),
        })
        .collect()
}

/// Describes every registered binding in registration order.
#[must_use]
pub fn list_steps(registry: &Registry) -> Vec<String> {
    registry
        .catalogue()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}
