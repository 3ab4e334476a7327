//! Error types for concentration analysis.
//!
//! Every failure the pipeline can surface is one of the variants below. The
//! text boundary in [`crate::tool`] turns them into user-facing messages.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur while parsing or analyzing a portfolio.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input path does not exist.
    #[error("File not found at {}", .path.display())]
    NotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The header could not be mapped onto the required columns.
    #[error("Could not identify 'Symbol' and 'Market Value' columns. Found: {found:?}")]
    Schema {
        /// The header cells actually present in the file.
        found: Vec<String>,
    },

    /// No valid rows, or the accepted rows sum to zero.
    #[error("Total portfolio value is 0.")]
    EmptyPortfolio,

    /// Any other failure while reading or converting the input.
    #[error("analysis failed: {reason}")]
    Io {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl AnalysisError {
    /// Create a not-found error.
    #[must_use]
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a schema error from the header cells that were found.
    #[must_use]
    pub fn schema<S: Into<String>>(found: impl IntoIterator<Item = S>) -> Self {
        Self::Schema {
            found: found.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an I/O error.
    #[must_use]
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io {
            reason: reason.into(),
        }
    }

    /// Short machine-friendly name of the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Schema { .. } => "schema",
            Self::EmptyPortfolio => "empty_portfolio",
            Self::Io { .. } => "io",
        }
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(err: csv::Error) -> Self {
        Self::io(err.to_string())
    }
}
