//! `stepmatch` application entry point.
//!
//! Uses `eyre` for opaque error handling at the application boundary,
//! converting domain-specific errors into human-readable reports.
//!
//! Configuration is loaded with layered precedence via `OrthoConfig`:
//! 1. Application defaults
//! 2. Configuration file (`.stepmatch.toml`, `~/.config/stepmatch/config.toml`
//!    or the path from `STEPMATCH_CONFIG_PATH`)
//! 3. Environment variables (`STEPMATCH_*`)
//! 4. Command-line arguments

use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use eyre::{Report, Result as EyreResult};
use stepmatch::api::{self, CommandOutcome, RunParams};
use stepmatch::config::{AppConfig, Cli, Commands, ResolveArgs, RunArgs, load_config};
use stepmatch::error::Result as StepmatchResult;
use stepmatch::registry::Registry;
use stepmatch::runner::{RunOptions, RunSummary, ScenarioReport, StepStatus};
use stepmatch::steps;

/// Application entry point.
///
/// Loads configuration, initialises logging, builds the step registry and
/// dispatches to the subcommand handler.
fn main() -> EyreResult<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(&cli).map_err(Report::from)?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(config.logging.level))
        .with_writer(std::io::stderr)
        .init();

    let registry = steps::registry().map_err(Report::from)?;
    let outcome = run(&cli, &config, &registry).map_err(Report::from)?;
    Ok(match outcome {
        CommandOutcome::Success => ExitCode::SUCCESS,
        CommandOutcome::Failure => ExitCode::FAILURE,
    })
}

/// Execute the CLI command, returning domain-specific errors.
fn run(cli: &Cli, config: &AppConfig, registry: &Registry) -> StepmatchResult<CommandOutcome> {
    match &cli.command {
        Commands::Run(args) => run_features(config, registry, args),
        Commands::Resolve(args) => Ok(resolve(registry, args)),
        Commands::Steps => Ok(list_steps(registry)),
    }
}

/// Run feature files and print a report.
fn run_features(
    config: &AppConfig,
    registry: &Registry,
    args: &RunArgs,
) -> StepmatchResult<CommandOutcome> {
    let params = RunParams {
        paths: args.paths.clone(),
        features_dir: Utf8PathBuf::from(config.features_dir()),
        options: RunOptions {
            stop_on_failure: config.runner.stop_on_failure,
            dry_run: config.runner.dry_run,
        },
    };
    let summary = api::run(registry, &params)?;
    print_summary(&summary);
    Ok(CommandOutcome::from_success(summary.passed()))
}

#[expect(clippy::print_stdout, reason = "CLI output is the intended behaviour")]
fn print_summary(summary: &RunSummary) {
    for feature in &summary.features {
        println!("Feature: {} ({})", feature.name, feature.path);
        for scenario in &feature.scenarios {
            print_scenario(scenario);
        }
        println!();
    }
    println!("{summary}");
}

#[expect(clippy::print_stdout, reason = "CLI output is the intended behaviour")]
fn print_scenario(scenario: &ScenarioReport) {
    println!("  Scenario: {} ... {}", scenario.name, scenario.status());
    for step in &scenario.steps {
        let status = match &step.status {
            StepStatus::Passed { handler } => format!("passed ({handler})"),
            StepStatus::Failed { message } => format!("failed: {message}"),
            StepStatus::Undefined => String::from("undefined"),
            StepStatus::Skipped => String::from("skipped"),
            StepStatus::Untested => String::from("untested"),
        };
        println!("    {} {} ... {status}", step.written, step.text);
    }
}

/// Print every binding a sentence resolves to.
#[expect(clippy::print_stdout, reason = "CLI output is the intended behaviour")]
fn resolve(registry: &Registry, args: &ResolveArgs) -> CommandOutcome {
    let sentence = args.sentence();
    let candidates = api::resolve_step(registry, args.keyword, &sentence);
    if candidates.is_empty() {
        println!("undefined step: {} {sentence}", args.keyword);
        return CommandOutcome::Failure;
    }
    for candidate in &candidates {
        println!("{candidate}");
    }
    CommandOutcome::Success
}

/// Print the registered step definitions.
#[expect(clippy::print_stdout, reason = "CLI output is the intended behaviour")]
fn list_steps(registry: &Registry) -> CommandOutcome {
    for line in api::list_steps(registry) {
        println!("{line}");
    }
    CommandOutcome::Success
}
