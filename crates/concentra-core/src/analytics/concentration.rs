//! Holding ranking and concentration warnings.

use super::allocation::{fraction, SectorWeight};
use crate::portfolio::Portfolio;
use crate::types::{sector_label, AnalysisConfig, Holding};
use rust_decimal::Decimal;
use serde::Serialize;

/// A holding with its share of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoldingWeight {
    /// Instrument identifier.
    pub symbol: String,

    /// Sector classification, if any.
    pub sector: Option<String>,

    /// Market value.
    pub value: Decimal,

    /// Fraction of total portfolio value (0-1).
    pub weight: Decimal,
}

impl HoldingWeight {
    fn from_holding(holding: &Holding, total: Decimal) -> Self {
        Self {
            symbol: holding.symbol.clone(),
            sector: holding.sector.clone(),
            value: holding.value,
            weight: fraction(holding.value, total),
        }
    }

    /// Sector name used for display.
    #[must_use]
    pub fn sector_label(&self) -> &str {
        sector_label(self.sector.as_deref())
    }

    /// Weight as a percentage (0-100).
    #[must_use]
    pub fn weight_pct(&self) -> Decimal {
        self.weight * Decimal::ONE_HUNDRED
    }
}

/// Ranks holdings by value, largest first.
///
/// The sort is stable: holdings with equal value keep their input order.
#[must_use]
pub fn rank_holdings(portfolio: &Portfolio) -> Vec<HoldingWeight> {
    let total = portfolio.total_value();
    let mut ranked: Vec<&Holding> = portfolio.holdings().iter().collect();
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked
        .into_iter()
        .map(|h| HoldingWeight::from_holding(h, total))
        .collect()
}

/// Returns the `n` largest holdings (fewer if the portfolio is smaller).
#[must_use]
pub fn top_holdings(portfolio: &Portfolio, n: usize) -> Vec<HoldingWeight> {
    let mut ranked = rank_holdings(portfolio);
    ranked.truncate(n);
    ranked
}

/// A concentration limit breach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiskWarning {
    /// The largest holding exceeds the single-holding limit.
    SingleStockConcentration {
        /// The largest holding.
        symbol: String,
        /// Its weight (0-1).
        weight: Decimal,
        /// The limit that was exceeded (0-1).
        limit: Decimal,
    },

    /// One or more sectors exceed the sector limit.
    SectorConcentration {
        /// Every sector above the limit, largest first.
        sectors: Vec<SectorWeight>,
        /// The limit that was exceeded (0-1).
        limit: Decimal,
    },
}

impl RiskWarning {
    /// Short title of the warning.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::SingleStockConcentration { .. } => "High Single Stock Concentration",
            Self::SectorConcentration { .. } => "High Sector Concentration",
        }
    }

    /// The limit that was breached (0-1).
    #[must_use]
    pub fn limit(&self) -> Decimal {
        match self {
            Self::SingleStockConcentration { limit, .. } | Self::SectorConcentration { limit, .. } => {
                *limit
            }
        }
    }
}

/// Checks the largest holding against the single-holding limit.
///
/// `ranked` must be sorted largest first, as returned by [`rank_holdings`].
#[must_use]
pub fn single_stock_warning(ranked: &[HoldingWeight], config: &AnalysisConfig) -> Option<RiskWarning> {
    let largest = ranked.first()?;
    (largest.weight > config.single_holding_limit).then(|| RiskWarning::SingleStockConcentration {
        symbol: largest.symbol.clone(),
        weight: largest.weight,
        limit: config.single_holding_limit,
    })
}

/// Checks every sector against the sector limit.
#[must_use]
pub fn sector_warning(allocation: &[SectorWeight], config: &AnalysisConfig) -> Option<RiskWarning> {
    let breaches: Vec<SectorWeight> = allocation
        .iter()
        .filter(|s| s.weight > config.sector_limit)
        .cloned()
        .collect();

    (!breaches.is_empty()).then(|| RiskWarning::SectorConcentration {
        sectors: breaches,
        limit: config.sector_limit,
    })
}
