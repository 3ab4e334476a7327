//! # Concentra Core
//!
//! Concentration risk analytics for portfolio holdings exports.
//!
//! This crate reads a CSV export of holdings, aggregates it and flags
//! positions or sectors that make up too much of the portfolio.
//!
//! ## Design Philosophy
//!
//! - **Pure analytics**: analysis and rendering take explicit inputs and do no I/O
//! - **Exact money**: values are [`rust_decimal::Decimal`], so sector totals sum to the portfolio total
//! - **Tolerant parsing**: bad rows are skipped and reported, not fatal
//! - **Closed errors**: every failure is an [`AnalysisError`] variant
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use concentra_core::prelude::*;
//!
//! let analysis = Analyzer::new().analyze_file("holdings.csv")?;
//! println!("{}", analysis.render());
//! # Ok::<(), AnalysisError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`parser`] - Header resolution, value normalization, CSV reading
//! - [`analytics`] - Sector allocation, ranking, concentration warnings
//! - [`render`] - Markdown report and number formatting
//! - [`portfolio`] - Portfolio and builder types
//! - [`types`] - Holding and configuration types
//! - [`tool`] - Path-to-text entry points

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod error;
pub mod parser;
pub mod portfolio;
pub mod render;
pub mod tool;
pub mod types;

// Re-export error types at crate root
pub use error::{AnalysisError, AnalysisResult};

pub use types::{
    AnalysisConfig, ColumnAliases, Holding, DEFAULT_SECTOR_LIMIT, DEFAULT_SINGLE_HOLDING_LIMIT,
    DEFAULT_TOP_HOLDINGS, UNKNOWN_SECTOR,
};

pub use portfolio::{Portfolio, PortfolioBuilder};

pub use parser::{parse_path, parse_reader, ParsedPortfolio, SkipReason, SkippedRow};

pub use analytics::{
    analyze, rank_holdings, sector_allocation, top_holdings, HoldingWeight, RiskAssessment,
    RiskReport, RiskWarning, SectorWeight,
};

pub use render::{format_amount, format_money, format_weight, render_markdown};

pub use tool::{analyze_portfolio_risk, render_error, Analyzer, FileAnalysis};

/// Prelude module for convenient imports.
///
/// ```rust
/// use concentra_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analytics::{analyze, RiskAssessment, RiskReport, RiskWarning};
    pub use crate::error::{AnalysisError, AnalysisResult};
    pub use crate::portfolio::{Portfolio, PortfolioBuilder};
    pub use crate::render::render_markdown;
    pub use crate::tool::{analyze_portfolio_risk, Analyzer, FileAnalysis};
    pub use crate::types::{AnalysisConfig, ColumnAliases, Holding};
    pub use rust_decimal::Decimal;
}
