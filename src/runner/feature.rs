//! Plain-text feature files.
//!
//! Feature text is parsed with [`gherkin`] and converted into the runner's
//! own types. Supported constructs:
//!
//! ```text
//! @tag
//! Feature: name
//!   free description
//!
//!   Background:
//!     Given ...
//!
//!   @tag
//!   Scenario: name
//!     Given ...
//!     And ...
//!       """
//!       doc string
//!       """
//! ```
//!
//! Scenario outlines, `Examples`, `Rule` and data tables are valid Gherkin
//! but are rejected here, with the line they appear on.
//!
//! `And`, `But` and `*` lines take the effective keyword of the last `Given`,
//! `When` or `Then` line in the same block.

use std::fmt;

use gherkin::{GherkinEnv, StepType};

use crate::error::FeatureError;
use crate::registry::Keyword;

/// Path reported for features parsed from in-memory text.
pub const INLINE_PATH: &str = "<inline>";

/// The keyword as written on a step line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKeyword {
    /// `Given`
    Given,
    /// `When`
    When,
    /// `Then`
    Then,
    /// `And`
    And,
    /// `But`
    But,
    /// `*`
    Star,
}

impl StepKeyword {
    /// Returns the keyword as written in feature files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
            Self::Star => "*",
        }
    }

    /// Returns the registry keyword this line sets, or `None` for
    /// continuation keywords.
    #[must_use]
    pub const fn primary(self) -> Option<Keyword> {
        match self {
            Self::Given => Some(Keyword::Given),
            Self::When => Some(Keyword::When),
            Self::Then => Some(Keyword::Then),
            Self::And | Self::But | Self::Star => None,
        }
    }

    /// Recovers the written keyword. gherkin folds `And`, `But` and `*` into
    /// the step type, so those are told apart by their text.
    fn of(step: &gherkin::Step) -> Self {
        match step.keyword.trim() {
            "And" => Self::And,
            "But" => Self::But,
            "*" => Self::Star,
            _ => match step.ty {
                StepType::Given => Self::Given,
                StepType::When => Self::When,
                StepType::Then => Self::Then,
            },
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The keyword as written.
    pub written: StepKeyword,
    /// The keyword used for resolution.
    pub keyword: Keyword,
    /// The sentence after the keyword.
    pub text: String,
    /// Attached doc string, if any.
    pub doc_string: Option<String>,
    /// One-based line number.
    pub line: usize,
}

/// A named list of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// The scenario title.
    pub name: String,
    /// Tags written above the scenario, without `@`.
    pub tags: Vec<String>,
    /// The steps in order.
    pub steps: Vec<Step>,
    /// One-based line number of the `Scenario:` line.
    pub line: usize,
}

/// A parsed feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// The feature title.
    pub name: String,
    /// Where the feature was read from.
    pub path: String,
    /// Tags written above the feature, without `@`.
    pub tags: Vec<String>,
    /// Description lines following the title.
    pub description: Vec<String>,
    /// Steps run before every scenario.
    pub background: Vec<Step>,
    /// The scenarios in order.
    pub scenarios: Vec<Scenario>,
}

impl Feature {
    /// Parses feature text. `path` is only used in error messages and reports.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::Syntax`] when the text is not valid Gherkin,
    /// and [`FeatureError::Parse`] with the offending line number for
    /// unsupported constructs.
    pub fn parse(path: &str, source: &str) -> Result<Self, FeatureError> {
        let parsed = gherkin::Feature::parse(source, GherkinEnv::default()).map_err(|error| {
            FeatureError::Syntax {
                path: path.to_owned(),
                message: error.to_string(),
            }
        })?;
        Converter { path }.feature(parsed)
    }
}

/// Maps gherkin's tree onto the runner's types, rejecting what the runner
/// cannot execute.
struct Converter<'a> {
    path: &'a str,
}

impl Converter<'_> {
    fn feature(&self, parsed: gherkin::Feature) -> Result<Feature, FeatureError> {
        let background = match parsed.background {
            Some(background) => self.steps(background.steps)?,
            None => Vec::new(),
        };
        let scenarios = parsed
            .scenarios
            .into_iter()
            .map(|scenario| self.scenario(scenario))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(rule) = parsed.rules.first() {
            return Err(self.unsupported(rule.position.line, &rule.keyword));
        }
        Ok(Feature {
            name: parsed.name,
            path: self.path.to_owned(),
            tags: parsed.tags,
            description: description_lines(parsed.description.as_deref()),
            background,
            scenarios,
        })
    }

    fn scenario(&self, parsed: gherkin::Scenario) -> Result<Scenario, FeatureError> {
        if !matches!(parsed.keyword.as_str(), "Scenario" | "Example") {
            return Err(self.unsupported(parsed.position.line, &parsed.keyword));
        }
        if let Some(examples) = parsed.examples.first() {
            return Err(self.unsupported(examples.position.line, &examples.keyword));
        }
        Ok(Scenario {
            name: parsed.name,
            tags: parsed.tags,
            steps: self.steps(parsed.steps)?,
            line: parsed.position.line,
        })
    }

    /// Converts one block's steps. Effective-keyword tracking starts afresh
    /// for every block.
    fn steps(&self, parsed: Vec<gherkin::Step>) -> Result<Vec<Step>, FeatureError> {
        let mut effective = None;
        let mut steps = Vec::with_capacity(parsed.len());
        for step in parsed {
            let line = step.position.line;
            if let Some(table) = &step.table {
                return Err(self.error(table.position.line, "data tables are not supported"));
            }
            let written = StepKeyword::of(&step);
            let keyword = match written.primary() {
                Some(keyword) => keyword,
                None => effective.ok_or_else(|| {
                    self.error(
                        line,
                        &format!("'{written}' must follow a Given, When or Then step"),
                    )
                })?,
            };
            effective = Some(keyword);
            steps.push(Step {
                written,
                keyword,
                text: step.value,
                doc_string: step.docstring.as_deref().map(doc_string_body),
                line,
            });
        }
        Ok(steps)
    }

    fn unsupported(&self, line: usize, construct: &str) -> FeatureError {
        self.error(line, &format!("'{construct}' is not supported"))
    }

    fn error(&self, line: usize, message: &str) -> FeatureError {
        FeatureError::Parse {
            path: self.path.to_owned(),
            line,
            message: message.to_owned(),
        }
    }
}

fn description_lines(description: Option<&str>) -> Vec<String> {
    description
        .map(|text| {
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// gherkin keeps the line breaks after the opening delimiter and before the
/// closing one; the common indentation is already gone.
fn doc_string_body(raw: &str) -> String {
    let opened = raw.strip_prefix('\n').unwrap_or(raw);
    opened.strip_suffix('\n').unwrap_or(opened).to_owned()
}
