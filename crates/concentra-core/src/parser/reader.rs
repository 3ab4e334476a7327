//! CSV reading.

use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use rust_decimal::Decimal;
use serde::Serialize;

use super::columns::{resolve_columns, ColumnMap};
use super::value::{normalize_value, ValueCell};
use crate::error::{AnalysisError, AnalysisResult};
use crate::portfolio::Portfolio;
use crate::types::{ColumnAliases, Holding};

/// Why a data row was left out of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The value cell is empty after stripping decoration.
    EmptyValue,
    /// The value cell is not a number.
    InvalidValue(String),
    /// The value cell is a negative amount.
    NegativeValue(Decimal),
    /// The symbol cell is empty.
    MissingSymbol,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue => write!(f, "empty value"),
            Self::InvalidValue(raw) => write!(f, "invalid value '{raw}'"),
            Self::NegativeValue(v) => write!(f, "negative value {v}"),
            Self::MissingSymbol => write!(f, "missing symbol"),
        }
    }
}

/// A data row that was skipped during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// Line number in the source (the header is line 1).
    pub line: u64,

    /// The symbol cell, if one was present.
    pub symbol: Option<String>,

    /// Why the row was skipped.
    pub reason: SkipReason,
}

/// Output of a parse: the accepted holdings plus diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPortfolio {
    /// Holdings accepted from the export, in file order.
    pub portfolio: Portfolio,

    /// Header cells as they appeared in the file.
    pub headers: Vec<String>,

    /// Resolved column positions.
    pub columns: ColumnMap,

    /// Rows that were tolerated and left out.
    pub skipped: Vec<SkippedRow>,
}

impl ParsedPortfolio {
    /// Number of rows that were skipped.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Parses the holdings export at `path`.
///
/// The file handle is scoped to this call and released on every exit path.
///
/// # Errors
///
/// - [`AnalysisError::NotFound`] if the path does not exist
/// - [`AnalysisError::Schema`] if the header lacks a symbol or value column
/// - [`AnalysisError::Io`] for any other read failure
pub fn parse_path(
    path: impl AsRef<Path>,
    aliases: &ColumnAliases,
) -> AnalysisResult<ParsedPortfolio> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AnalysisError::not_found(path),
        _ => AnalysisError::io(format!("{}: {}", path.display(), e)),
    })?;

    tracing::debug!(path = %path.display(), "reading holdings export");
    parse_reader(file, aliases)
}

/// Parses a holdings export from any reader.
///
/// # Errors
///
/// Returns [`AnalysisError::Schema`] if the header lacks a symbol or value
/// column and [`AnalysisError::Io`] if the data cannot be read as UTF-8 CSV.
pub fn parse_reader<R: Read>(rdr: R, aliases: &ColumnAliases) -> AnalysisResult<ParsedPortfolio> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                super::columns::clean_header(h).to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let columns = resolve_columns(&headers, aliases)?;
    tracing::debug!(
        symbol = %headers[columns.symbol],
        value = %headers[columns.value],
        sector = ?columns.sector.map(|i| headers[i].as_str()),
        "resolved columns"
    );

    let mut holdings = Vec::new();
    let mut skipped = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);

        match read_row(&record, columns) {
            Ok(holding) => holdings.push(holding),
            Err((symbol, reason)) => {
                tracing::warn!(line, reason = %reason, "skipping row");
                skipped.push(SkippedRow {
                    line,
                    symbol,
                    reason,
                });
            }
        }
    }

    let portfolio = Portfolio::new(holdings)?;
    tracing::debug!(
        accepted = portfolio.holding_count(),
        skipped = skipped.len(),
        total = %portfolio.total_value(),
        "parsed holdings export"
    );

    Ok(ParsedPortfolio {
        portfolio,
        headers,
        columns,
        skipped,
    })
}

fn read_row(
    record: &csv::StringRecord,
    columns: ColumnMap,
) -> Result<Holding, (Option<String>, SkipReason)> {
    let symbol = record.get(columns.symbol).map(str::trim).unwrap_or("");
    let symbol_opt = (!symbol.is_empty()).then(|| symbol.to_string());

    let value = match normalize_value(record.get(columns.value).unwrap_or("")) {
        ValueCell::Empty => return Err((symbol_opt, SkipReason::EmptyValue)),
        ValueCell::Invalid(raw) => return Err((symbol_opt, SkipReason::InvalidValue(raw))),
        ValueCell::Amount(v) if v.is_sign_negative() && !v.is_zero() => {
            return Err((symbol_opt, SkipReason::NegativeValue(v)))
        }
        ValueCell::Amount(v) => v,
    };

    let Some(symbol) = symbol_opt else {
        return Err((None, SkipReason::MissingSymbol));
    };

    let holding = Holding::new(symbol, value);
    Ok(match columns.sector.and_then(|i| record.get(i)) {
        Some(sector) => holding.with_sector(sector),
        None => holding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(data: &str) -> AnalysisResult<ParsedPortfolio> {
        parse_reader(data.as_bytes(), &ColumnAliases::default())
    }

    #[test]
    fn test_parse_basic() {
        let parsed = parse("Symbol,Market Value,Sector\nAAPL,$6000,Tech\nBND,\"4,000\",Bonds\n")
            .unwrap();

        let holdings = parsed.portfolio.holdings();
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0], Holding::new("AAPL", dec!(6000)).with_sector("Tech"));
        assert_eq!(holdings[1].value, dec!(4000));
        assert_eq!(parsed.portfolio.total_value(), dec!(10000));
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_skips_malformed_rows_and_continues() {
        let parsed = parse("Ticker,Value\nAAA,N/A\nBBB,\nCCC,250\n").unwrap();

        assert_eq!(parsed.portfolio.holding_count(), 1);
        assert_eq!(parsed.portfolio.holdings()[0].symbol, "CCC");
        assert_eq!(parsed.skipped_count(), 2);
        assert_eq!(parsed.skipped[0].line, 2);
        assert_eq!(
            parsed.skipped[0].reason,
            SkipReason::InvalidValue("N/A".to_string())
        );
        assert_eq!(parsed.skipped[1].reason, SkipReason::EmptyValue);
    }

    #[test]
    fn test_negative_and_symbolless_rows_skipped() {
        let parsed = parse("Symbol,Amount\nAAA,-5\n,100\nBBB,10\n").unwrap();
        assert_eq!(parsed.portfolio.holding_count(), 1);
        assert_eq!(parsed.skipped[0].reason, SkipReason::NegativeValue(dec!(-5)));
        assert_eq!(parsed.skipped[1].reason, SkipReason::MissingSymbol);
    }

    #[test]
    fn test_no_sector_column_leaves_holdings_unclassified() {
        let parsed = parse("Symbol,Amount\nAAA,1\nBBB,2\n").unwrap();
        assert!(parsed.portfolio.holdings().iter().all(|h| h.sector.is_none()));
        assert_eq!(parsed.columns.sector, None);
    }

    #[test]
    fn test_empty_sector_cell_is_unclassified() {
        let parsed = parse("Symbol,Value,Sector\nAAA,1,\nBBB,2,Energy\n").unwrap();
        assert_eq!(parsed.portfolio.holdings()[0].sector, None);
        assert_eq!(parsed.portfolio.holdings()[1].sector.as_deref(), Some("Energy"));
    }

    #[test]
    fn test_short_rows_tolerated() {
        let parsed = parse("Symbol,Sector,Value\nAAA,Tech\nBBB,Tech,7\n").unwrap();
        assert_eq!(parsed.portfolio.holding_count(), 1);
        assert_eq!(parsed.skipped[0].reason, SkipReason::EmptyValue);
    }

    #[test]
    fn test_byte_order_mark_stripped() {
        let parsed = parse("\u{feff}Symbol,Value\nAAA,1\n").unwrap();
        assert_eq!(parsed.headers[0], "Symbol");
    }

    #[test]
    fn test_header_only_yields_empty_portfolio() {
        let parsed = parse("Symbol,Value,Sector\n").unwrap();
        assert!(parsed.portfolio.is_empty());
        assert!(!parsed.portfolio.is_analyzable());
    }

    #[test]
    fn test_schema_error_lists_headers() {
        let err = parse("Name,Qty\nApple,3\n").unwrap_err();
        assert_eq!(err, AnalysisError::schema(["Name", "Qty"]));
    }

    #[test]
    fn test_empty_input_is_schema_error() {
        let err = parse("").unwrap_err();
        assert_eq!(err, AnalysisError::schema(Vec::<String>::new()));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let data: &[u8] = b"Symbol,Value\n\xff\xfe,1\n";
        let err = parse_reader(data, &ColumnAliases::default()).unwrap_err();
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = parse_path("/definitely/not/here.csv", &ColumnAliases::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::NotFound { .. }));
    }
}
