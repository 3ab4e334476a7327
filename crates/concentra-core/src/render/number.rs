//! Number formatting helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds half away from zero and fixes the scale to `dp` places.
fn fixed(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

/// Formats an amount with thousands separators and two decimal places.
///
/// ```rust
/// use concentra_core::render::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(1234567, 1)), "123,456.70");
/// ```
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    let text = fixed(value, 2).to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}

/// Formats an amount as dollars, e.g. `$10,000.00`.
#[must_use]
pub fn format_money(value: Decimal) -> String {
    format!("${}", format_amount(value))
}

/// Formats a fraction (0-1) as a percentage with one decimal place.
#[must_use]
pub fn format_weight(fraction: Decimal) -> String {
    format!("{}%", fixed(fraction * Decimal::ONE_HUNDRED, 1))
}

/// Formats a limit (0-1) as a compact percentage, e.g. `0.10` as `10%`.
#[must_use]
pub fn format_limit(fraction: Decimal) -> String {
    format!("{}%", (fraction * Decimal::ONE_HUNDRED).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(999.999)), "1,000.00");
        assert_eq!(format_amount(dec!(1200.5)), "1,200.50");
        assert_eq!(format_amount(dec!(10000)), "10,000.00");
        assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(dec!(-1234.5)), "-1,234.50");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(dec!(0.125)), "0.13");
        assert_eq!(format_amount(dec!(0.135)), "0.14");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(12345.67)), "$12,345.67");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(dec!(0.6)), "60.0%");
        assert_eq!(format_weight(dec!(1)), "100.0%");
        assert_eq!(format_weight(dec!(0.33333)), "33.3%");
        assert_eq!(format_weight(dec!(0.00049)), "0.0%");
    }

    #[test]
    fn test_format_limit() {
        assert_eq!(format_limit(dec!(0.10)), "10%");
        assert_eq!(format_limit(dec!(0.25)), "25%");
        assert_eq!(format_limit(dec!(0.125)), "12.5%");
    }
}
