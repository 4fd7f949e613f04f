//! Scenario execution.
//!
//! The runner feeds parsed [`Feature`]s through a [`Registry`]. Each scenario
//! gets a fresh [`ExecutionContext`]; background steps run first, then the
//! scenario's own steps in order. The first failed or undefined step ends the
//! scenario and the remaining steps are reported as skipped. Other scenarios
//! still run unless [`RunOptions::stop_on_failure`] is set.

mod feature;
mod report;


pub use feature::{Feature, INLINE_PATH, Scenario, Step, StepKeyword};
pub use report::{FeatureReport, RunSummary, ScenarioReport, ScenarioStatus, StepReport, StepStatus};

use tracing::{info, warn};

use crate::context::ExecutionContext;
use crate::error::StepError;
use crate::registry::Registry;

/// Runner behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop after the first scenario that does not pass.
    pub stop_on_failure: bool,
    /// Resolve steps without invoking their handlers.
    pub dry_run: bool,
}

/// Executes features against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Runner<'r> {
    registry: &'r Registry,
    options: RunOptions,
}

impl<'r> Runner<'r> {
    /// Creates a runner over `registry`.
    #[must_use]
    pub const fn new(registry: &'r Registry, options: RunOptions) -> Self {
        Self { registry, options }
    }

    /// Runs every feature in order.
    ///
    /// With `stop_on_failure`, the run ends after the first scenario that
    /// does not pass; later scenarios and features are not reported.
    #[must_use]
    pub fn run(&self, features: &[Feature]) -> RunSummary {
        let mut summary = RunSummary::default();
        for feature in features {
            let report = self.run_feature(feature);
            let stop = self.options.stop_on_failure && !report.passed();
            summary.features.push(report);
            if stop {
                info!("stopping after first failing scenario");
                break;
            }
        }
        summary
    }

    /// Runs every scenario of one feature.
    #[must_use]
    pub fn run_feature(&self, feature: &Feature) -> FeatureReport {
        info!(feature = %feature.name, path = %feature.path, "running feature");
        let mut report = FeatureReport {
            name: feature.name.clone(),
            path: feature.path.clone(),
            scenarios: Vec::new(),
        };
        for scenario in &feature.scenarios {
            let outcome = self.run_scenario(feature, scenario);
            let stop = self.options.stop_on_failure && !outcome.status().is_ok();
            report.scenarios.push(outcome);
            if stop {
                break;
            }
        }
        report
    }

    /// Runs the feature's background followed by one scenario.
    #[must_use]
    pub fn run_scenario(&self, feature: &Feature, scenario: &Scenario) -> ScenarioReport {
        let mut context = ExecutionContext::new();
        let mut steps = Vec::with_capacity(feature.background.len() + scenario.steps.len());
        let mut halted = false;
        for step in feature.background.iter().chain(&scenario.steps) {
            let status = if halted {
                StepStatus::Skipped
            } else {
                self.run_step(step, &mut context)
            };
            halted = halted || status.halts_scenario();
            steps.push(StepReport {
                written: step.written,
                text: step.text.clone(),
                line: step.line,
                status,
            });
        }
        let report = ScenarioReport {
            name: scenario.name.clone(),
            line: scenario.line,
            steps,
        };
        info!(
            scenario = %report.name,
            status = %report.status(),
            "scenario finished"
        );
        report
    }

    fn run_step(&self, step: &Step, context: &mut ExecutionContext) -> StepStatus {
        if self.options.dry_run {
            return match self.registry.find(step.keyword, &step.text) {
                Ok(_) => StepStatus::Untested,
                Err(_) => {
                    warn!(keyword = %step.keyword, sentence = %step.text, "undefined step");
                    StepStatus::Undefined
                }
            };
        }
        context.set_step_text(step.doc_string.clone());
        match self.registry.invoke(step.keyword, &step.text, context) {
            Ok(binding) => StepStatus::Passed {
                handler: binding.handler().name(),
            },
            Err(StepError::NoMatch { keyword, sentence }) => {
                warn!(%keyword, %sentence, line = step.line, "undefined step");
                StepStatus::Undefined
            }
            Err(error @ StepError::Failure { .. }) => StepStatus::Failed {
                message: error.to_string(),
            },
        }
    }
}
