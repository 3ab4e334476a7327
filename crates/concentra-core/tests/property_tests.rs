//! Property-based tests for analysis invariants.
//!
//! These tests verify properties that should hold for every portfolio:
//! - Sector values sum to the portfolio total
//! - Top holdings are the largest, sorted, with stable ties
//! - Analysis and rendering are deterministic
//! - Value normalization ignores currency decoration

use concentra_core::parser::{normalize_value, ValueCell};
use concentra_core::prelude::*;
use concentra_core::{rank_holdings, render_markdown};
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Generates a portfolio with N holdings across a handful of sectors.
fn generate_portfolio(n: usize, seed: u64) -> Portfolio {
    let sectors = [
        Some("Technology"),
        Some("Financials"),
        Some("Energy"),
        Some("Health Care"),
        None,
    ];

    let mut builder = PortfolioBuilder::new();
    for i in 0..n {
        let hash = simple_hash(seed, i as u64);
        // Cents, with frequent ties from the small modulus.
        let value = Decimal::new((hash % 5_000) as i64 * 100 + (hash % 7) as i64, 2);
        let sector = sectors[(hash >> 8) as usize % sectors.len()];
        builder = builder.add(format!("H{i}"), value, sector);
    }
    builder.build().unwrap()
}

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

// =============================================================================
// PROPERTY: SECTOR VALUES SUM TO TOTAL
// =============================================================================

#[test]
fn property_sector_values_sum_to_total() {
    let config = AnalysisConfig::default();

    for seed in 0..10 {
        for size in [1, 5, 10, 25, 100] {
            let portfolio = generate_portfolio(size, seed);
            if !portfolio.is_analyzable() {
                continue;
            }
            let report = analyze(&portfolio, &config).unwrap();

            let sum: Decimal = report.sector_allocation.iter().map(|s| s.value).sum();
            assert_eq!(
                sum, report.total_value,
                "Sector values should sum to total for size={size}, seed={seed}"
            );

            let weights: f64 = report
                .sector_allocation
                .iter()
                .map(|s| s.weight_pct().to_f64().unwrap_or(0.0))
                .sum::<f64>();
            approx::assert_abs_diff_eq!(weights, 100.0, epsilon = 1e-9);
        }
    }
}

// =============================================================================
// PROPERTY: TOP HOLDINGS ARE SORTED AND STABLE
// =============================================================================

#[test]
fn property_top_holdings_sorted_and_stable() {
    let config = AnalysisConfig::default();

    for seed in 0..10 {
        for size in [1, 3, 5, 6, 50] {
            let portfolio = generate_portfolio(size, seed);
            if !portfolio.is_analyzable() {
                continue;
            }
            let report = analyze(&portfolio, &config).unwrap();
            let top = &report.top_holdings;

            assert_eq!(top.len(), size.min(5));

            for pair in top.windows(2) {
                assert!(pair[0].value >= pair[1].value);
                if pair[0].value == pair[1].value {
                    let index = |s: &str| s[1..].parse::<usize>().unwrap();
                    assert!(
                        index(&pair[0].symbol) < index(&pair[1].symbol),
                        "Ties must keep input order: {} before {}",
                        pair[0].symbol,
                        pair[1].symbol
                    );
                }
            }

            // Nothing outside the top list is larger than its last entry.
            let smallest_top = top.last().unwrap().value;
            let ranked = rank_holdings(&portfolio);
            assert!(ranked[top.len()..].iter().all(|h| h.value <= smallest_top));
        }
    }
}

// =============================================================================
// PROPERTY: DETERMINISM
// =============================================================================

#[test]
fn property_analysis_is_idempotent() {
    let config = AnalysisConfig::default();

    for seed in 0..10 {
        let portfolio = generate_portfolio(40, seed);
        let first = analyze(&portfolio, &config).unwrap();
        let second = analyze(&portfolio, &config).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            render_markdown(&first, "p.csv"),
            render_markdown(&second, "p.csv")
        );
    }
}

#[test]
fn property_single_stock_flag_matches_largest_weight() {
    let config = AnalysisConfig::default();

    for seed in 0..20 {
        for size in [2, 8, 15, 30] {
            let portfolio = generate_portfolio(size, seed);
            if !portfolio.is_analyzable() {
                continue;
            }
            let report = analyze(&portfolio, &config).unwrap();
            let largest = rank_holdings(&portfolio)[0].weight;

            let flagged = report
                .warnings()
                .iter()
                .any(|w| matches!(w, RiskWarning::SingleStockConcentration { .. }));
            assert_eq!(flagged, largest > dec!(0.10), "size={size}, seed={seed}");
            assert_eq!(report.assessment.is_clear(), report.warnings().is_empty());
        }
    }
}

// =============================================================================
// PROPTEST: NORMALIZATION AND PARSING
// =============================================================================

fn with_grouping(int_part: u64) -> String {
    let digits = int_part.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

proptest! {
    #[test]
    fn prop_currency_decoration_is_ignored(int_part in 0u64..10_000_000_000, cents in 0u32..100) {
        let plain = format!("{int_part}.{cents:02}");
        let decorated = format!(" ${}.{cents:02} ", with_grouping(int_part));

        prop_assert_eq!(normalize_value(&decorated), normalize_value(&plain));
        prop_assert!(matches!(normalize_value(&plain), ValueCell::Amount(_)));
    }

    #[test]
    fn prop_parsed_total_matches_rows(values in proptest::collection::vec(0u32..1_000_000, 1..40)) {
        let mut csv = String::from("Ticker,Market Value\n");
        for (i, v) in values.iter().enumerate() {
            csv.push_str(&format!("T{i},\"${}\"\n", with_grouping(u64::from(*v))));
        }

        let parsed = concentra_core::parse_reader(csv.as_bytes(), &ColumnAliases::default()).unwrap();
        let expected: Decimal = values.iter().map(|v| Decimal::from(*v)).sum();

        prop_assert_eq!(parsed.portfolio.holding_count(), values.len());
        prop_assert_eq!(parsed.portfolio.total_value(), expected);
    }
}
