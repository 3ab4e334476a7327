//! Concentra CLI - Command-line interface for portfolio concentration risk.
//!
//! # Usage
//!
//! ```bash
//! # Markdown report for a holdings export
//! concentra analyze holdings.csv
//!
//! # Tighter limits, failing the build on any warning
//! concentra analyze holdings.csv --single-limit 5 --sector-limit 20 --strict
//!
//! # Structured output
//! concentra --format json analyze holdings.csv
//!
//! # Plain text report, errors included
//! concentra check holdings.csv
//!
//! # Write a default configuration file
//! concentra config init
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            output::print_error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let format = cli.format;
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, format, config, cli.quiet),
        Commands::Check(args) => commands::check::execute(args, config),
        Commands::Config(args) => commands::config::execute(args, format, config),
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!("{level},concentra_core={level},concentra_config={level},concentra={level}")
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
