//! Configuration for concentration analysis.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default number of holdings listed in the report.
pub const DEFAULT_TOP_HOLDINGS: usize = 5;

/// Default single-holding limit as a fraction of total value (10%).
pub const DEFAULT_SINGLE_HOLDING_LIMIT: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Default sector limit as a fraction of total value (25%).
pub const DEFAULT_SECTOR_LIMIT: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Header names accepted for the symbol column.
pub const SYMBOL_ALIASES: &[&str] = &["symbol", "ticker", "instrument"];

/// Header names accepted for the value column.
pub const VALUE_ALIASES: &[&str] = &["market value", "value", "amount", "current value"];

/// Header names accepted for the sector column.
pub const SECTOR_ALIASES: &[&str] = &["sector", "industry", "category"];

/// Thresholds and sizing for the risk analyzer.
///
/// Limits are fractions of total portfolio value; a warning fires when a
/// weight is strictly greater than its limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// How many of the largest holdings to report.
    pub top_holdings: usize,

    /// Largest acceptable weight for a single holding.
    pub single_holding_limit: Decimal,

    /// Largest acceptable weight for a single sector.
    pub sector_limit: Decimal,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_holdings: DEFAULT_TOP_HOLDINGS,
            single_holding_limit: DEFAULT_SINGLE_HOLDING_LIMIT,
            sector_limit: DEFAULT_SECTOR_LIMIT,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of holdings to report.
    #[must_use]
    pub fn with_top_holdings(mut self, n: usize) -> Self {
        self.top_holdings = n;
        self
    }

    /// Sets the single-holding limit.
    #[must_use]
    pub fn with_single_holding_limit(mut self, limit: Decimal) -> Self {
        self.single_holding_limit = limit;
        self
    }

    /// Sets the sector limit.
    #[must_use]
    pub fn with_sector_limit(mut self, limit: Decimal) -> Self {
        self.sector_limit = limit;
        self
    }
}

/// Header aliases used to locate the input columns.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAliases {
    /// Aliases for the required symbol column.
    pub symbol: Vec<String>,

    /// Aliases for the required value column.
    pub value: Vec<String>,

    /// Aliases for the optional sector column.
    pub sector: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            symbol: to_owned(SYMBOL_ALIASES),
            value: to_owned(VALUE_ALIASES),
            sector: to_owned(SECTOR_ALIASES),
        }
    }
}

impl ColumnAliases {
    /// Returns true if `header` matches one of `aliases`.
    #[must_use]
    pub fn matches(aliases: &[String], header: &str) -> bool {
        let header = header.trim();
        aliases.iter().any(|a| a.trim().eq_ignore_ascii_case(header))
    }
}

fn to_owned(aliases: &[&str]) -> Vec<String> {
    aliases.iter().map(|s| (*s).to_string()).collect()
}
