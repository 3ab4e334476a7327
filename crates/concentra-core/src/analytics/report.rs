//! Risk report assembly.

use super::allocation::{sector_allocation, SectorWeight};
use super::concentration::{
    rank_holdings, sector_warning, single_stock_warning, HoldingWeight, RiskWarning,
};
use crate::error::{AnalysisError, AnalysisResult};
use crate::portfolio::Portfolio;
use crate::types::AnalysisConfig;
use rust_decimal::Decimal;
use serde::Serialize;

/// Outcome of the concentration checks.
///
/// A clean result is an explicit variant so consumers can tell "checked and
/// clean" apart from "not checked".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "warnings", rename_all = "snake_case")]
pub enum RiskAssessment {
    /// No limit was breached.
    NoConcentrationRisk,
    /// One or more limits were breached, in fixed order.
    Concentrated(Vec<RiskWarning>),
}

impl RiskAssessment {
    fn from_warnings(warnings: Vec<RiskWarning>) -> Self {
        if warnings.is_empty() {
            Self::NoConcentrationRisk
        } else {
            Self::Concentrated(warnings)
        }
    }

    /// Returns true if no limit was breached.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::NoConcentrationRisk)
    }

    /// The warnings raised (empty when clear).
    #[must_use]
    pub fn warnings(&self) -> &[RiskWarning] {
        match self {
            Self::NoConcentrationRisk => &[],
            Self::Concentrated(w) => w,
        }
    }
}

/// Concentration risk report for one portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskReport {
    /// Total portfolio value.
    pub total_value: Decimal,

    /// Number of holdings analyzed.
    pub holding_count: usize,

    /// How many holdings were requested for the ranking.
    pub top_n: usize,

    /// Largest holdings, largest first.
    pub top_holdings: Vec<HoldingWeight>,

    /// Value by sector, largest first.
    pub sector_allocation: Vec<SectorWeight>,

    /// Result of the limit checks.
    pub assessment: RiskAssessment,
}

impl RiskReport {
    /// The warnings raised (empty when clear).
    #[must_use]
    pub fn warnings(&self) -> &[RiskWarning] {
        self.assessment.warnings()
    }

    /// Returns true if any limit was breached.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.assessment.is_clear()
    }
}

/// Analyzes a portfolio for concentration risk.
///
/// Warnings are evaluated independently and reported in fixed order:
/// single-stock concentration first, then sector concentration.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyPortfolio`] if the portfolio's total value
/// is not positive. This is checked before any weight is computed.
pub fn analyze(portfolio: &Portfolio, config: &AnalysisConfig) -> AnalysisResult<RiskReport> {
    if !portfolio.is_analyzable() {
        return Err(AnalysisError::EmptyPortfolio);
    }

    let mut ranked = rank_holdings(portfolio);
    let allocation = sector_allocation(portfolio);

    let warnings: Vec<RiskWarning> = [
        single_stock_warning(&ranked, config),
        sector_warning(&allocation, config),
    ]
    .into_iter()
    .flatten()
    .collect();

    ranked.truncate(config.top_holdings);

    tracing::debug!(
        holdings = portfolio.holding_count(),
        sectors = allocation.len(),
        warnings = warnings.len(),
        "analyzed portfolio"
    );

    Ok(RiskReport {
        total_value: portfolio.total_value(),
        holding_count: portfolio.holding_count(),
        top_n: config.top_holdings,
        top_holdings: ranked,
        sector_allocation: allocation,
        assessment: RiskAssessment::from_warnings(warnings),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PortfolioBuilder;
    use crate::types::Holding;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_portfolio_rejected() {
        let portfolio = PortfolioBuilder::new().build().unwrap();
        assert_eq!(
            analyze(&portfolio, &AnalysisConfig::default()),
            Err(AnalysisError::EmptyPortfolio)
        );
    }

    #[test]
    fn test_zero_total_rejected() {
        let portfolio = PortfolioBuilder::new()
            .add_holding(Holding::new("CASH", Decimal::ZERO))
            .build()
            .unwrap();
        assert_eq!(
            analyze(&portfolio, &AnalysisConfig::default()),
            Err(AnalysisError::EmptyPortfolio)
        );
    }

    #[test]
    fn test_clean_portfolio_is_explicitly_clear() {
        let mut builder = PortfolioBuilder::new();
        let sectors = ["A", "B", "C", "D", "E"];
        for i in 0..20 {
            builder = builder.add(format!("S{i}"), dec!(5), Some(sectors[i % 5]));
        }
        let report = analyze(&builder.build().unwrap(), &AnalysisConfig::default()).unwrap();

        assert_eq!(report.assessment, RiskAssessment::NoConcentrationRisk);
        assert!(report.warnings().is_empty());
        assert!(!report.has_warnings());
        assert_eq!(report.top_holdings.len(), 5);
    }

    #[test]
    fn test_warning_order_is_fixed() {
        let portfolio = PortfolioBuilder::new()
            .add("AAPL", dec!(6000), Some("Tech"))
            .add("MSFT", dec!(3000), Some("Tech"))
            .add("GOOG", dec!(1000), Some("Tech"))
            .build()
            .unwrap();
        let report = analyze(&portfolio, &AnalysisConfig::default()).unwrap();

        let titles: Vec<_> = report.warnings().iter().map(RiskWarning::title).collect();
        assert_eq!(
            titles,
            ["High Single Stock Concentration", "High Sector Concentration"]
        );
    }

    #[test]
    fn test_top_holdings_respects_config() {
        let portfolio = PortfolioBuilder::new()
            .add("A", dec!(1), None)
            .add("B", dec!(2), None)
            .add("C", dec!(3), None)
            .build()
            .unwrap();
        let config = AnalysisConfig::default().with_top_holdings(2);
        let report = analyze(&portfolio, &config).unwrap();

        let symbols: Vec<_> = report.top_holdings.iter().map(|h| h.symbol.as_str()).collect();
        assert_eq!(symbols, ["C", "B"]);
        assert_eq!(report.holding_count, 3);
    }

    #[test]
    fn test_single_stock_uses_largest_even_when_top_is_zero() {
        let portfolio = PortfolioBuilder::new()
            .add("A", dec!(90), Some("X"))
            .add("B", dec!(10), Some("Y"))
            .build()
            .unwrap();
        let config = AnalysisConfig::default().with_top_holdings(0);
        let report = analyze(&portfolio, &config).unwrap();

        assert!(report.top_holdings.is_empty());
        assert!(matches!(
            report.warnings()[0],
            RiskWarning::SingleStockConcentration { ref symbol, .. } if symbol == "A"
        ));
    }
}
