//! File-to-text analysis entry points.
//!
//! [`analyze_portfolio_risk`] is the outermost boundary: it takes a path and
//! always returns text, turning every [`AnalysisError`] into a message
//! instead of propagating it.

use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::analytics::{analyze, RiskReport};
use crate::error::{AnalysisError, AnalysisResult};
use crate::parser::{parse_path, parse_reader, ParsedPortfolio, SkippedRow};
use crate::render::render_markdown;
use crate::types::{AnalysisConfig, ColumnAliases};

/// Parser and analyzer settings bundled together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analyzer {
    config: AnalysisConfig,
    aliases: ColumnAliases,
}

/// A completed analysis of one holdings export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileAnalysis {
    /// Display label, usually the file name.
    pub label: String,

    /// The risk report.
    pub report: RiskReport,

    /// Rows left out during parsing.
    pub skipped: Vec<SkippedRow>,
}

impl FileAnalysis {
    /// Renders the report as markdown.
    #[must_use]
    pub fn render(&self) -> String {
        render_markdown(&self.report, &self.label)
    }
}

impl Analyzer {
    /// Creates an analyzer with default limits and column aliases.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the analysis configuration.
    #[must_use]
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the column aliases.
    #[must_use]
    pub fn with_aliases(mut self, aliases: ColumnAliases) -> Self {
        self.aliases = aliases;
        self
    }

    /// The analysis configuration.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Parses and analyzes the export at `path`.
    ///
    /// # Errors
    ///
    /// Returns the parser's errors, or [`AnalysisError::EmptyPortfolio`] if
    /// no row with a positive total survived parsing.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> AnalysisResult<FileAnalysis> {
        let path = path.as_ref();
        let parsed = parse_path(path, &self.aliases)?;
        self.finish(parsed, label_for(path))
    }

    /// Parses and analyzes an export from any reader.
    ///
    /// # Errors
    ///
    /// Same as [`Analyzer::analyze_file`], minus the not-found case.
    pub fn analyze_reader<R: Read>(
        &self,
        rdr: R,
        label: impl Into<String>,
    ) -> AnalysisResult<FileAnalysis> {
        let parsed = parse_reader(rdr, &self.aliases)?;
        self.finish(parsed, label.into())
    }

    /// Analyzes the export at `path` and renders the outcome as text.
    ///
    /// Never fails: errors are rendered with [`render_error`].
    #[must_use]
    pub fn report_text(&self, path: impl AsRef<Path>) -> String {
        match self.analyze_file(path) {
            Ok(analysis) => analysis.render(),
            Err(err) => render_error(&err),
        }
    }

    fn finish(&self, parsed: ParsedPortfolio, label: String) -> AnalysisResult<FileAnalysis> {
        let report = analyze(&parsed.portfolio, &self.config)?;
        Ok(FileAnalysis {
            label,
            report,
            skipped: parsed.skipped,
        })
    }
}

/// Analyzes a holdings export with default settings and returns the report
/// as markdown, or an error message.
///
/// ```rust,no_run
/// let text = concentra_core::analyze_portfolio_risk("/data/holdings.csv");
/// println!("{text}");
/// ```
#[must_use]
pub fn analyze_portfolio_risk(path: impl AsRef<Path>) -> String {
    Analyzer::default().report_text(path)
}

/// Renders an error as a user-facing message.
#[must_use]
pub fn render_error(err: &AnalysisError) -> String {
    format!("Error: {err}")
}

/// Report label for a path: its file name, or the whole path if it has none.
#[must_use]
pub fn label_for(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
