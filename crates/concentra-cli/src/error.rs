//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Percentage flag outside (0, 100].
    #[error("Invalid limit: {0}. Must be a percentage above 0 and at most 100.")]
    InvalidLimit(f64),

    /// Top-holdings flag outside the accepted range.
    #[error("Invalid top holdings count: {0}. Must be between 1 and {max}.", max = concentra_config::MAX_TOP_HOLDINGS)]
    InvalidTop(usize),

    /// Refusing to overwrite an existing file.
    #[error("File already exists: {0}. Use --force to overwrite.")]
    AlreadyExists(String),

    /// Analysis failed.
    #[error(transparent)]
    Analysis(#[from] concentra_core::AnalysisError),

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] concentra_config::ConfigError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
