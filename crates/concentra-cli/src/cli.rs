//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AnalyzeArgs, CheckArgs, ConfigArgs};

/// Concentra - Portfolio concentration risk analyzer
#[derive(Parser)]
#[command(name = "concentra")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Configuration file (defaults to the per-user config location)
    #[arg(short, long, global = true, env = "CONCENTRA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a holdings CSV for concentration risk
    Analyze(AnalyzeArgs),

    /// Print the text report for a holdings CSV, or the error message
    Check(CheckArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Markdown report
    #[default]
    Markdown,
    /// Human-readable tables
    Table,
    /// JSON format
    Json,
}
