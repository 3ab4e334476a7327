//! Builder for Portfolio construction.

use super::Portfolio;
use crate::error::AnalysisResult;
use crate::types::Holding;
use rust_decimal::Decimal;

/// Builder for constructing portfolios.
///
/// # Example
///
/// ```rust
/// use concentra_core::PortfolioBuilder;
/// use rust_decimal::Decimal;
///
/// let portfolio = PortfolioBuilder::new()
///     .add("AAPL", Decimal::from(6000), Some("Tech"))
///     .add("BND", Decimal::from(4000), None)
///     .build()
///     .unwrap();
///
/// assert_eq!(portfolio.total_value(), Decimal::from(10000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    holdings: Vec<Holding>,
}

impl PortfolioBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holding.
    #[must_use]
    pub fn add_holding(mut self, holding: Holding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// Adds multiple holdings, preserving their order.
    #[must_use]
    pub fn add_holdings(mut self, holdings: impl IntoIterator<Item = Holding>) -> Self {
        self.holdings.extend(holdings);
        self
    }

    /// Adds a holding from its parts.
    #[must_use]
    pub fn add(self, symbol: impl Into<String>, value: Decimal, sector: Option<&str>) -> Self {
        let holding = match sector {
            Some(s) => Holding::new(symbol, value).with_sector(s),
            None => Holding::new(symbol, value),
        };
        self.add_holding(holding)
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if the total value overflows.
    pub fn build(self) -> AnalysisResult<Portfolio> {
        Portfolio::new(self.holdings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_preserves_order() {
        let portfolio = PortfolioBuilder::new()
            .add("B", dec!(1), None)
            .add("A", dec!(2), Some("Tech"))
            .add_holding(Holding::new("C", dec!(3)))
            .build()
            .unwrap();

        let symbols: Vec<_> = portfolio.holdings().iter().map(|h| h.symbol.as_str()).collect();
        assert_eq!(symbols, ["B", "A", "C"]);
        assert_eq!(portfolio.total_value(), dec!(6));
    }
}
