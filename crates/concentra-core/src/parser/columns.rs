//! Header resolution.

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::ColumnAliases;
use serde::Serialize;

/// Column indices resolved from a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnMap {
    /// Index of the symbol column.
    pub symbol: usize,

    /// Index of the value column.
    pub value: usize,

    /// Index of the sector column, if the export has one.
    pub sector: Option<usize>,
}

/// Resolves the symbol, value and sector columns from `headers`.
///
/// For each role the first header (in file order) matching any alias is
/// selected. A leading byte-order mark on the first header is ignored.
///
/// # Errors
///
/// Returns [`AnalysisError::Schema`] naming every header found when either
/// the symbol or the value column cannot be located.
pub fn resolve_columns<S: AsRef<str>>(
    headers: &[S],
    aliases: &ColumnAliases,
) -> AnalysisResult<ColumnMap> {
    let cleaned: Vec<&str> = headers.iter().map(|h| clean_header(h.as_ref())).collect();

    let find = |set: &[String]| cleaned.iter().position(|h| ColumnAliases::matches(set, h));

    match (find(&aliases.symbol), find(&aliases.value)) {
        (Some(symbol), Some(value)) => Ok(ColumnMap {
            symbol,
            value,
            sector: find(&aliases.sector),
        }),
        _ => Err(AnalysisError::schema(cleaned)),
    }
}

/// Strips a UTF-8 byte-order mark from a header cell.
pub(crate) fn clean_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}')
}
