//! Concentration risk analytics.
//!
//! All functions here are pure: they take a [`Portfolio`](crate::Portfolio)
//! and an [`AnalysisConfig`](crate::AnalysisConfig) and return plain data.
//!
//! - **Allocation**: value grouped by sector, largest first
//! - **Ranking**: holdings ordered by value, ties kept in input order
//! - **Warnings**: single-holding and sector limits
//!
//! # Example
//!
//! ```rust
//! use concentra_core::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let portfolio = PortfolioBuilder::new()
//!     .add("AAPL", Decimal::from(6000), Some("Tech"))
//!     .add("MSFT", Decimal::from(3000), Some("Tech"))
//!     .add("GOOG", Decimal::from(1000), Some("Tech"))
//!     .build()
//!     .unwrap();
//!
//! let report = analyze(&portfolio, &AnalysisConfig::default()).unwrap();
//! assert_eq!(report.warnings().len(), 2);
//! ```

mod allocation;
mod concentration;
mod report;

pub use allocation::*;
pub use concentration::*;
pub use report::*;
