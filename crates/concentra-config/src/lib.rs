//! Concentra Configuration Layer
//!
//! Loads, validates and writes the TOML configuration used by the
//! `concentra` analyzer.
//!
//! # Features
//!
//! - **Analysis limits**: single-holding and sector limits, report size
//! - **Column aliases**: header names recognised for each column role
//! - **Validation**: every problem in a file is reported at once
//! - **Discovery**: `<config dir>/concentra/config.toml` is used when present
//!
//! # Example
//!
//! ```rust
//! use concentra_config::ConcentraConfig;
//!
//! let config = ConcentraConfig::from_toml_str(
//!     r#"
//!     [analysis]
//!     sector_limit = 0.30
//!     "#,
//! )
//! .unwrap();
//!
//! let analyzer = config.analyzer();
//! assert_eq!(analyzer.config().top_holdings, 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod settings;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use settings::{
    default_path, AnalysisSection, ColumnsSection, ConcentraConfig, ConfigSource,
    MAX_TOP_HOLDINGS,
};
