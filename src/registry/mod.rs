//! Step registry and resolution.
//!
//! The [`Registry`] owns every `(keyword, pattern) → handler` binding. It is
//! filled once during start-up and queried read-only afterwards:
//!
//! - [`Registry::resolve`] lists every binding that matches a sentence, for
//!   tooling that wants all candidates;
//! - [`Registry::find`] picks the effective binding, the first candidate in
//!   registration order;
//! - [`Registry::invoke`] runs the effective binding's handler against a
//!   context.
//!
//! Resolution consults the sentence's own keyword first. Wildcard
//! ([`Keyword::Step`]) bindings are consulted only when nothing under the
//! sentence's keyword matches.
//!
//! Duplicates are legal: the same pattern may be registered several times
//! under one keyword, under different keywords, or for different handlers.
//! Every registration is kept and reported.

mod handler;
mod keyword;


use std::collections::BTreeMap;
use std::fmt;
use std::panic::Location;

use tracing::debug;

pub use handler::{Handler, HandlerResult, ensure};
pub use keyword::{Keyword, UnknownKeyword};

use crate::context::ExecutionContext;
use crate::error::{PatternError, StepError};
use crate::pattern::{Pattern, StepArgs};

/// A registered `(keyword, pattern)` pair and its handler.
#[derive(Debug, Clone)]
pub struct Binding {
    keyword: Keyword,
    pattern: Pattern,
    handler: Handler,
    location: &'static Location<'static>,
    sequence: usize,
}

impl Binding {
    /// Returns the keyword the binding was registered under.
    #[must_use]
    pub const fn keyword(&self) -> Keyword {
        self.keyword
    }

    /// Returns the compiled pattern.
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the bound handler.
    #[must_use]
    pub const fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Returns the source location of the registration call.
    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Returns the binding's position in global registration order.
    #[must_use]
    pub const fn sequence(&self) -> usize {
        self.sequence
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@{}(\"{}\") -> {} at {}:{}",
            self.keyword,
            self.pattern,
            self.handler.name(),
            self.location.file(),
            self.location.line()
        )
    }
}

/// A binding that matched a sentence, with the values it extracted.
#[derive(Debug, Clone)]
pub struct Resolution<'r> {
    /// The matching binding.
    pub binding: &'r Binding,
    /// Placeholder values in pattern order.
    pub args: StepArgs,
}

/// Ordered collection of bindings per keyword.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    bindings: BTreeMap<Keyword, Vec<Binding>>,
    registered: usize,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles `pattern` and appends a binding for `handler` under `keyword`.
    ///
    /// No uniqueness check is made. The caller's source location is recorded
    /// on the binding.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the pattern does not compile; nothing is
    /// registered in that case.
    #[track_caller]
    pub fn register(
        &mut self,
        keyword: Keyword,
        pattern: &str,
        handler: &Handler,
    ) -> Result<(), PatternError> {
        let location = Location::caller();
        let compiled = Pattern::compile(pattern)?;
        debug!(
            %keyword,
            pattern,
            handler = handler.name(),
            file = location.file(),
            line = location.line(),
            "registered step"
        );
        let sequence = self.registered;
        self.registered += 1;
        self.bindings.entry(keyword).or_default().push(Binding {
            keyword,
            pattern: compiled,
            handler: handler.clone(),
            location,
            sequence,
        });
        Ok(())
    }

    /// Returns the bindings registered under `keyword`, in registration order.
    #[must_use]
    pub fn bindings(&self, keyword: Keyword) -> &[Binding] {
        self.bindings
            .get(&keyword)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns every binding in global registration order.
    #[must_use]
    pub fn catalogue(&self) -> Vec<&Binding> {
        let mut all: Vec<&Binding> = self.bindings.values().flatten().collect();
        all.sort_by_key(|binding| binding.sequence);
        all
    }

    /// Returns the total number of bindings.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.registered
    }

    /// Returns whether nothing has been registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.registered == 0
    }

    /// Lists every binding matching `sentence` under `keyword`.
    ///
    /// Candidates are returned in registration order. When none is registered
    /// under `keyword`, the wildcard bindings are consulted instead.
    #[must_use]
    pub fn resolve(&self, keyword: Keyword, sentence: &str) -> Vec<Resolution<'_>> {
        let direct = Self::matching(self.bindings(keyword), sentence);
        if !direct.is_empty() || keyword.is_wildcard() {
            debug!(%keyword, sentence, candidates = direct.len(), "resolved step");
            return direct;
        }
        let fallback = Self::matching(self.bindings(Keyword::Step), sentence);
        debug!(
            %keyword,
            sentence,
            candidates = fallback.len(),
            "resolved step through wildcard bindings"
        );
        fallback
    }

    /// Returns the effective binding for `sentence`: the first candidate in
    /// registration order.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::NoMatch`] when no binding matches.
    pub fn find(&self, keyword: Keyword, sentence: &str) -> Result<Resolution<'_>, StepError> {
        self.resolve(keyword, sentence)
            .into_iter()
            .next()
            .ok_or_else(|| StepError::NoMatch {
                keyword,
                sentence: sentence.to_owned(),
            })
    }

    /// Resolves `sentence` and runs the effective handler against `context`.
    ///
    /// Returns the binding that ran.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::NoMatch`] when no binding matches and
    /// [`StepError::Failure`] when the handler fails.
    pub fn invoke(
        &self,
        keyword: Keyword,
        sentence: &str,
        context: &mut ExecutionContext,
    ) -> Result<&Binding, StepError> {
        let Resolution { binding, args } = self.find(keyword, sentence)?;
        debug!(%keyword, sentence, handler = binding.handler.name(), %args, "invoking step");
        binding
            .handler
            .call(context, &args)
            .map_err(|source| StepError::Failure {
                keyword,
                sentence: sentence.to_owned(),
                source,
            })?;
        Ok(binding)
    }

    fn matching<'r>(bindings: &'r [Binding], sentence: &str) -> Vec<Resolution<'r>> {
        bindings
            .iter()
            .filter_map(|binding| {
                binding
                    .pattern
                    .captures(sentence)
                    .map(|args| Resolution { binding, args })
            })
            .collect()
    }
}
