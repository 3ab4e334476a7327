//! Value cell normalization.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Result of normalizing a value cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueCell {
    /// Nothing left after stripping decoration.
    Empty,
    /// The cell could not be read as a number.
    Invalid(String),
    /// The cell is a number.
    Amount(Decimal),
}

/// Normalizes a monetary cell such as `"$12,345.67"`.
///
/// Every `$` and `,` is removed and surrounding whitespace trimmed before
/// conversion. Plain and scientific notation are accepted.
#[must_use]
pub fn normalize_value(cell: &str) -> ValueCell {
    let stripped: String = cell.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    let text = stripped.trim();

    if text.is_empty() {
        return ValueCell::Empty;
    }

    match Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)) {
        Ok(amount) => ValueCell::Amount(amount),
        Err(_) => ValueCell::Invalid(text.to_string()),
    }
}
