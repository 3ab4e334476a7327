//! Sector allocation.

use crate::portfolio::Portfolio;
use crate::types::sector_label;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// Aggregated value for one sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectorWeight {
    /// Sector name; `None` collects unclassified holdings.
    pub sector: Option<String>,

    /// Number of holdings in the sector.
    pub count: usize,

    /// Sum of holding values in the sector.
    pub value: Decimal,

    /// Fraction of total portfolio value (0-1).
    pub weight: Decimal,
}

impl SectorWeight {
    /// Sector name used for display.
    #[must_use]
    pub fn label(&self) -> &str {
        sector_label(self.sector.as_deref())
    }

    /// Weight as a percentage (0-100).
    #[must_use]
    pub fn weight_pct(&self) -> Decimal {
        self.weight * Decimal::ONE_HUNDRED
    }
}

/// Groups holdings by sector and sums their values.
///
/// The result is sorted by value descending. Sectors with equal value keep
/// the order in which they were first seen in the portfolio.
#[must_use]
pub fn sector_allocation(portfolio: &Portfolio) -> Vec<SectorWeight> {
    let total = portfolio.total_value();
    let mut index: HashMap<Option<&str>, usize> = HashMap::new();
    let mut buckets: Vec<SectorWeight> = Vec::new();

    for h in portfolio.holdings() {
        let key = h.sector.as_deref();
        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push(SectorWeight {
                sector: h.sector.clone(),
                count: 0,
                value: Decimal::ZERO,
                weight: Decimal::ZERO,
            });
            buckets.len() - 1
        });

        let bucket = &mut buckets[slot];
        bucket.count += 1;
        bucket.value += h.value;
    }

    for bucket in &mut buckets {
        bucket.weight = fraction(bucket.value, total);
    }

    buckets.sort_by(|a, b| b.value.cmp(&a.value));
    buckets
}

/// `part / total`, or zero when the total is zero.
pub(crate) fn fraction(part: Decimal, total: Decimal) -> Decimal {
    part.checked_div(total).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PortfolioBuilder;
    use rust_decimal_macros::dec;

    #[test]
    fn test_groups_and_sorts() {
        let portfolio = PortfolioBuilder::new()
            .add("AAPL", dec!(4000), Some("Tech"))
            .add("BND", dec!(4500), Some("Bonds"))
            .add("MSFT", dec!(1000), Some("Tech"))
            .add("GLD", dec!(500), None)
            .build()
            .unwrap();

        let alloc = sector_allocation(&portfolio);
        let labels: Vec<_> = alloc.iter().map(SectorWeight::label).collect();
        assert_eq!(labels, ["Tech", "Bonds", "Unknown"]);
        assert_eq!(alloc[0].value, dec!(5000));
        assert_eq!(alloc[0].count, 2);
        assert_eq!(alloc[0].weight, dec!(0.5));
        assert_eq!(alloc[2].weight_pct(), dec!(5));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let portfolio = PortfolioBuilder::new()
            .add("A", dec!(100), Some("Utilities"))
            .add("B", dec!(100), Some("Energy"))
            .add("C", dec!(100), Some("Health"))
            .build()
            .unwrap();

        let labels: Vec<_> = sector_allocation(&portfolio)
            .iter()
            .map(|s| s.label().to_string())
            .collect();
        assert_eq!(labels, ["Utilities", "Energy", "Health"]);
    }

    #[test]
    fn test_sum_equals_total() {
        let portfolio = PortfolioBuilder::new()
            .add("A", dec!(0.01), Some("X"))
            .add("B", dec!(1234.56), Some("Y"))
            .add("C", dec!(99.99), Some("X"))
            .build()
            .unwrap();

        let sum: Decimal = sector_allocation(&portfolio).iter().map(|s| s.value).sum();
        assert_eq!(sum, portfolio.total_value());
    }

    #[test]
    fn test_empty_portfolio() {
        let portfolio = PortfolioBuilder::new().build().unwrap();
        assert!(sector_allocation(&portfolio).is_empty());
    }
}
