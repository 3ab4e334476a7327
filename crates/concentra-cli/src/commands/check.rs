//! Check command implementation.
//!
//! Prints the plain text report for a holdings export. Analysis failures are
//! printed as an error line on stdout and do not change the exit status.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::commands::load_config;

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Holdings export (CSV)
    pub file: PathBuf,
}

/// Execute the check command.
pub fn execute(args: CheckArgs, config_path: Option<&Path>) -> Result<ExitCode> {
    let analyzer = load_config(config_path)?.analyzer();
    println!("{}", analyzer.report_text(&args.file));
    Ok(ExitCode::SUCCESS)
}
