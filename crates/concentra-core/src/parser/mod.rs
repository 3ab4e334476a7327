//! Holdings export parsing.
//!
//! Turns a delimited text export (header row plus data rows) into a
//! [`Portfolio`](crate::Portfolio):
//!
//! - **Column resolution**: header cells are matched case-insensitively
//!   against [`ColumnAliases`](crate::ColumnAliases); the first match in
//!   file order wins for each role
//! - **Value normalization**: currency symbols and grouping separators are
//!   stripped before conversion
//! - **Row tolerance**: rows with empty or unparseable values are skipped and
//!   recorded as [`SkippedRow`]s instead of failing the whole file
//!
//! # Example
//!
//! ```rust
//! use concentra_core::parser::parse_reader;
//! use concentra_core::ColumnAliases;
//!
//! let data = "Ticker,Market Value\nAAPL,\"$1,200.50\"\nBAD,N/A\n";
//! let parsed = parse_reader(data.as_bytes(), &ColumnAliases::default()).unwrap();
//!
//! assert_eq!(parsed.portfolio.holding_count(), 1);
//! assert_eq!(parsed.skipped.len(), 1);
//! ```

mod columns;
mod reader;
mod value;

pub use columns::*;
pub use reader::*;
pub use value::*;
