//! Config command implementation.
//!
//! Shows, locates, creates and validates the configuration file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand};

use concentra_config::{default_path, ConcentraConfig, ConfigError};
use concentra_core::render::format_limit;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_header, print_info, print_json, print_success, print_table, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a configuration file with the default settings
    Init(InitArgs),

    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the file (defaults to the configuration location)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// File to validate (defaults to the configuration location)
    pub file: Option<PathBuf>,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat, config_path: Option<&Path>) -> Result<ExitCode> {
    match args.command {
        ConfigCommand::Show => show(format, config_path)?,
        ConfigCommand::Path => println!("{}", location(config_path)?.display()),
        ConfigCommand::Init(init_args) => init(init_args, config_path)?,
        ConfigCommand::Validate(validate_args) => validate(validate_args, config_path)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn location(config_path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => default_path(),
    }
}

fn show(format: OutputFormat, config_path: Option<&Path>) -> Result<(), CliError> {
    let (config, source) = ConcentraConfig::load(config_path)?;

    match format {
        OutputFormat::Markdown => print!("{}", config.to_toml_string()?),
        OutputFormat::Json => print_json(&config)?,
        OutputFormat::Table => {
            print_header("Configuration");
            print_info(&format!("Source: {source}"));
            let analysis = &config.analysis;
            let columns = &config.columns;
            print_table(&[
                KeyValue::new("top_holdings", analysis.top_holdings.to_string()),
                KeyValue::new("single_holding_limit", format_limit(analysis.single_holding_limit)),
                KeyValue::new("sector_limit", format_limit(analysis.sector_limit)),
                KeyValue::new("columns.symbol", columns.symbol.join(", ")),
                KeyValue::new("columns.value", columns.value.join(", ")),
                KeyValue::new("columns.sector", columns.sector.join(", ")),
            ]);
        }
    }
    Ok(())
}

fn init(args: InitArgs, config_path: Option<&Path>) -> Result<(), CliError> {
    let path = match args.path {
        Some(path) => path,
        None => location(config_path)?,
    };

    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path.display().to_string()));
    }

    ConcentraConfig::default().save(&path)?;
    tracing::info!(path = %path.display(), "wrote default configuration");
    print_success(&format!("Wrote {}", path.display()));
    Ok(())
}

fn validate(args: ValidateArgs, config_path: Option<&Path>) -> Result<(), CliError> {
    let path = match args.file {
        Some(path) => path,
        None => location(config_path)?,
    };

    ConcentraConfig::from_file(&path)?;
    print_success(&format!("{} is valid", path.display()));
    Ok(())
}
