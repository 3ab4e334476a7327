//! Portfolio struct and core methods.

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::Holding;
use rust_decimal::Decimal;
use serde::Serialize;

/// An ordered collection of holdings with its derived total value.
///
/// The total is computed once at construction and always equals the sum of
/// the holding values. Holding order is the order rows were accepted in, and
/// is what ties are broken by during ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Portfolio {
    holdings: Vec<Holding>,
    total_value: Decimal,
}

impl Portfolio {
    /// Creates a portfolio from holdings, summing their values.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Io`] if the sum overflows the decimal range.
    pub fn new(holdings: Vec<Holding>) -> AnalysisResult<Self> {
        let total_value = holdings.iter().try_fold(Decimal::ZERO, |acc, h| {
            acc.checked_add(h.value)
                .ok_or_else(|| AnalysisError::io(format!("value overflow at {}", h.symbol)))
        })?;

        Ok(Self {
            holdings,
            total_value,
        })
    }

    /// Returns the holdings in input order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Returns the total value of all holdings.
    #[must_use]
    pub fn total_value(&self) -> Decimal {
        self.total_value
    }

    /// Returns the number of holdings.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the portfolio has no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Returns true if the portfolio can be analyzed (positive total value).
    #[must_use]
    pub fn is_analyzable(&self) -> bool {
        self.total_value > Decimal::ZERO
    }

    /// Returns the weight of `value` as a fraction of total value.
    ///
    /// Returns `None` for a portfolio with no value.
    #[must_use]
    pub fn weight_of(&self, value: Decimal) -> Option<Decimal> {
        if self.is_analyzable() {
            value.checked_div(self.total_value)
        } else {
            None
        }
    }
}
