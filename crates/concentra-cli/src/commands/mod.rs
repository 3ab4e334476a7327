//! CLI command implementations.

pub mod analyze;
pub mod check;
pub mod config;

pub use analyze::AnalyzeArgs;
pub use check::CheckArgs;
pub use config::ConfigArgs;

use std::path::Path;

use concentra_config::{ConcentraConfig, ConfigSource, MAX_TOP_HOLDINGS};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::{CliError, CliResult};

/// Converts a percentage flag (e.g. `15`) into a fraction (`0.15`).
pub fn parse_limit(percent: f64) -> CliResult<Decimal> {
    if !(percent > 0.0 && percent <= 100.0) {
        return Err(CliError::InvalidLimit(percent));
    }
    let pct = Decimal::from_f64(percent).ok_or(CliError::InvalidLimit(percent))?;
    Ok(pct / Decimal::ONE_HUNDRED)
}

/// Validates a top-holdings count.
pub fn validate_top(n: usize) -> CliResult<usize> {
    if !(1..=MAX_TOP_HOLDINGS).contains(&n) {
        return Err(CliError::InvalidTop(n));
    }
    Ok(n)
}

/// Loads the effective configuration, logging where it came from.
pub fn load_config(explicit: Option<&Path>) -> CliResult<ConcentraConfig> {
    let (config, source) = ConcentraConfig::load(explicit)?;
    match &source {
        ConfigSource::Defaults => tracing::debug!("using built-in configuration"),
        ConfigSource::File(path) => tracing::debug!(path = %path.display(), "using configuration file"),
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(10.0).unwrap(), Decimal::new(10, 2));
        assert_eq!(parse_limit(12.5).unwrap(), Decimal::new(125, 3));
        assert_eq!(parse_limit(100.0).unwrap(), Decimal::ONE);
        assert!(parse_limit(0.0).is_err());
        assert!(parse_limit(-5.0).is_err());
        assert!(parse_limit(150.0).is_err());
        assert!(parse_limit(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_top() {
        assert_eq!(validate_top(5).unwrap(), 5);
        assert!(validate_top(0).is_err());
        assert!(validate_top(MAX_TOP_HOLDINGS + 1).is_err());
    }
}
