//! Run reports.

use std::fmt;

use super::StepKeyword;

/// Outcome of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// The handler ran and returned successfully.
    Passed {
        /// Name of the handler that ran.
        handler: &'static str,
    },
    /// The handler failed.
    Failed {
        /// The step failure, including keyword, sentence and cause.
        message: String,
    },
    /// No binding matched.
    Undefined,
    /// Not run because an earlier step did not pass.
    Skipped,
    /// Resolved during a dry run; the handler was not invoked.
    Untested,
}

impl StepStatus {
    pub(crate) const fn halts_scenario(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Undefined)
    }
}

/// One step line and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// The keyword as written.
    pub written: StepKeyword,
    /// The sentence.
    pub text: String,
    /// One-based line number in the feature file.
    pub line: usize,
    /// What happened.
    pub status: StepStatus,
}

/// Aggregate status of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioStatus {
    /// Every step passed.
    Passed,
    /// A step failed.
    Failed,
    /// A step was undefined.
    Undefined,
    /// Dry run: every step resolved.
    Untested,
}

impl ScenarioStatus {
    /// Returns whether the status counts as success.
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Passed | Self::Untested)
    }
}

impl fmt::Display for ScenarioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Undefined => "undefined",
            Self::Untested => "untested",
        })
    }
}

/// Steps and outcome of one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    /// The scenario title.
    pub name: String,
    /// One-based line number of the scenario header.
    pub line: usize,
    /// Background and scenario steps, in execution order.
    pub steps: Vec<StepReport>,
}

impl ScenarioReport {
    /// Derives the scenario status from its steps.
    #[must_use]
    pub fn status(&self) -> ScenarioStatus {
        let mut status = ScenarioStatus::Passed;
        for step in &self.steps {
            match step.status {
                StepStatus::Failed { .. } => return ScenarioStatus::Failed,
                StepStatus::Undefined => return ScenarioStatus::Undefined,
                StepStatus::Untested => status = ScenarioStatus::Untested,
                StepStatus::Passed { .. } | StepStatus::Skipped => {}
            }
        }
        status
    }
}

/// Scenarios of one feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureReport {
    /// The feature title.
    pub name: String,
    /// Where the feature was read from.
    pub path: String,
    /// Scenario outcomes in order.
    pub scenarios: Vec<ScenarioReport>,
}

impl FeatureReport {
    /// Returns whether every scenario passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.scenarios
            .iter()
            .all(|scenario| scenario.status().is_ok())
    }
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Feature outcomes in order.
    pub features: Vec<FeatureReport>,
}

impl RunSummary {
    /// Iterates over every scenario report.
    pub fn scenarios(&self) -> impl Iterator<Item = &ScenarioReport> {
        self.features
            .iter()
            .flat_map(|feature| feature.scenarios.iter())
    }

    /// Counts scenarios with the given status.
    #[must_use]
    pub fn count(&self, status: ScenarioStatus) -> usize {
        self.scenarios()
            .filter(|scenario| scenario.status() == status)
            .count()
    }

    /// Counts steps matching `predicate`.
    pub fn count_steps(&self, predicate: impl Fn(&StepStatus) -> bool) -> usize {
        self.scenarios()
            .flat_map(|scenario| scenario.steps.iter())
            .filter(|step| predicate(&step.status))
            .count()
    }

    /// Returns whether every scenario passed (or resolved, in a dry run).
    #[must_use]
    pub fn passed(&self) -> bool {
        self.features.iter().all(FeatureReport::passed)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scenarios = self.scenarios().count();
        write!(
            f,
            "{} features, {scenarios} scenarios ({} passed, {} failed, {} undefined, {} untested), \
             {} steps skipped",
            self.features.len(),
            self.count(ScenarioStatus::Passed),
            self.count(ScenarioStatus::Failed),
            self.count(ScenarioStatus::Undefined),
            self.count(ScenarioStatus::Untested),
            self.count_steps(|status| matches!(status, StepStatus::Skipped)),
        )
    }
}
