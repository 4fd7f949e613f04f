//! Command-line argument definitions for stepmatch.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use super::LogLevel;
use crate::registry::Keyword;

/// Command-line interface for stepmatch.
#[derive(Debug, Parser)]
#[command(name = "stepmatch")]
#[command(
    author,
    version,
    about = "Resolve and run plain-text BDD steps against registered handlers"
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Directory searched for feature files.
    #[arg(long, global = true)]
    pub features_dir: Option<String>,

    /// Log verbosity.
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run feature files.
    Run(RunArgs),

    /// List every binding a sentence resolves to.
    Resolve(ResolveArgs),

    /// List registered step definitions.
    Steps,
}

/// Arguments for the `run` subcommand.
#[derive(Debug, Default, Parser)]
pub struct RunArgs {
    /// Feature files or directories. Defaults to the features directory.
    pub paths: Vec<Utf8PathBuf>,

    /// Stop after the first scenario that does not pass.
    #[arg(long)]
    pub stop: bool,

    /// Resolve steps without invoking handlers.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `resolve` subcommand.
#[derive(Debug, Parser)]
pub struct ResolveArgs {
    /// Step keyword (`given`, `when`, `then` or `step`).
    #[arg(value_enum)]
    pub keyword: Keyword,

    /// The step sentence; words are joined with single spaces.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub sentence: Vec<String>,
}

impl ResolveArgs {
    /// Returns the sentence as one string.
    #[must_use]
    pub fn sentence(&self) -> String {
        self.sentence.join(" ")
    }
}
