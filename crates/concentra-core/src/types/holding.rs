//! Holding type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label used for holdings that carry no sector classification.
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// A single position in a portfolio.
///
/// The sector is tagged absence: `None` means the export carried no
/// classification for this row. It renders as [`UNKNOWN_SECTOR`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// Instrument identifier (ticker, symbol).
    pub symbol: String,

    /// Market value in the export's currency.
    pub value: Decimal,

    /// Sector classification, if the export provided one.
    pub sector: Option<String>,
}

impl Holding {
    /// Creates an unclassified holding.
    #[must_use]
    pub fn new(symbol: impl Into<String>, value: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            value,
            sector: None,
        }
    }

    /// Sets the sector classification.
    ///
    /// Blank names and the literal `Unknown` label collapse to `None`, so the
    /// two spellings of "no classification" always land in one bucket.
    #[must_use]
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = normalize_sector(sector.into());
        self
    }

    /// Returns true if the holding has a sector classification.
    #[must_use]
    pub fn is_classified(&self) -> bool {
        self.sector.is_some()
    }

    /// Returns the sector name used for display.
    #[must_use]
    pub fn sector_label(&self) -> &str {
        sector_label(self.sector.as_deref())
    }
}

/// Display label for an optional sector.
#[must_use]
pub fn sector_label(sector: Option<&str>) -> &str {
    sector.unwrap_or(UNKNOWN_SECTOR)
}

fn normalize_sector(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNKNOWN_SECTOR) {
        None
    } else if trimmed.len() == raw.len() {
        Some(raw)
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unclassified_by_default() {
        let h = Holding::new("AAPL", dec!(100));
        assert!(!h.is_classified());
        assert_eq!(h.sector_label(), "Unknown");
    }

    #[test]
    fn test_with_sector() {
        let h = Holding::new("AAPL", dec!(100)).with_sector(" Tech ");
        assert_eq!(h.sector.as_deref(), Some("Tech"));
        assert_eq!(h.sector_label(), "Tech");
    }

    #[test]
    fn test_blank_and_unknown_collapse() {
        assert_eq!(Holding::new("A", dec!(1)).with_sector("   ").sector, None);
        assert_eq!(Holding::new("A", dec!(1)).with_sector("unknown").sector, None);
        assert_eq!(Holding::new("A", dec!(1)).with_sector("Unknown").sector, None);
    }
}
