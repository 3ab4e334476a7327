//! Analyze command implementation.
//!
//! Runs the concentration analysis on a holdings export and prints it in the
//! requested format.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use concentra_core::render::format_limit;
use concentra_core::{format_money, format_weight, FileAnalysis, RiskWarning};

use crate::cli::OutputFormat;
use crate::commands::{load_config, parse_limit, validate_top};
use crate::error::CliError;
use crate::output::{print_header, print_info, print_json, print_success, print_table, print_warning, KeyValue};

/// Exit code when `--strict` is set and a limit was breached.
pub const STRICT_FAILURE: u8 = 2;

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Holdings export (CSV)
    pub file: PathBuf,

    /// Label used in the report heading (defaults to the file name)
    #[arg(short, long)]
    pub label: Option<String>,

    /// Number of holdings to list
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Single-holding limit (as percentage, e.g., 10 for 10%)
    #[arg(long)]
    pub single_limit: Option<f64>,

    /// Sector limit (as percentage, e.g., 25 for 25%)
    #[arg(long)]
    pub sector_limit: Option<f64>,

    /// Exit with status 2 when any concentration warning fires
    #[arg(long)]
    pub strict: bool,
}

/// JSON payload: the analysis plus a count of skipped rows.
#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    #[serde(flatten)]
    analysis: &'a FileAnalysis,
    skipped_rows: usize,
}

#[derive(Tabled)]
struct HoldingRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

#[derive(Tabled)]
struct SectorRow {
    #[tabled(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Holdings")]
    count: usize,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

/// Execute the analyze command.
pub fn execute(
    args: AnalyzeArgs,
    format: OutputFormat,
    config_path: Option<&Path>,
    quiet: bool,
) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    let mut analysis_config = config.analysis_config();

    if let Some(top) = args.top {
        analysis_config = analysis_config.with_top_holdings(validate_top(top)?);
    }
    if let Some(pct) = args.single_limit {
        analysis_config = analysis_config.with_single_holding_limit(parse_limit(pct)?);
    }
    if let Some(pct) = args.sector_limit {
        analysis_config = analysis_config.with_sector_limit(parse_limit(pct)?);
    }

    let analyzer = config.analyzer().with_config(analysis_config);
    let mut analysis = analyzer
        .analyze_file(&args.file)
        .map_err(CliError::from)?;
    if let Some(label) = args.label {
        analysis.label = label;
    }

    tracing::info!(
        file = %args.file.display(),
        holdings = analysis.report.holding_count,
        warnings = analysis.report.warnings().len(),
        skipped = analysis.skipped.len(),
        "analysis complete"
    );

    match format {
        OutputFormat::Markdown => println!("{}", analysis.render()),
        OutputFormat::Table => print_tables(&analysis, quiet),
        OutputFormat::Json => print_json(&AnalyzeOutput {
            analysis: &analysis,
            skipped_rows: analysis.skipped.len(),
        })
        .map_err(CliError::from)?,
    }

    if args.strict && analysis.report.has_warnings() {
        return Ok(ExitCode::from(STRICT_FAILURE));
    }
    Ok(ExitCode::SUCCESS)
}

fn print_tables(analysis: &FileAnalysis, quiet: bool) {
    let report = &analysis.report;

    print_header(&format!("Portfolio Analysis for {}", analysis.label));
    print_table(&[
        KeyValue::new("Total Value", format_money(report.total_value)),
        KeyValue::new("Holdings", report.holding_count.to_string()),
        KeyValue::new("Sectors", report.sector_allocation.len().to_string()),
        KeyValue::new("Skipped Rows", analysis.skipped.len().to_string()),
    ]);

    let holdings: Vec<HoldingRow> = report
        .top_holdings
        .iter()
        .enumerate()
        .map(|(i, h)| HoldingRow {
            rank: i + 1,
            symbol: h.symbol.clone(),
            sector: h.sector_label().to_string(),
            value: format_money(h.value),
            weight: format_weight(h.weight),
        })
        .collect();
    print_header(&format!("Top {} Holdings", report.top_n));
    print_table(&holdings);

    let sectors: Vec<SectorRow> = report
        .sector_allocation
        .iter()
        .map(|s| SectorRow {
            sector: s.label().to_string(),
            count: s.count,
            value: format_money(s.value),
            weight: format_weight(s.weight),
        })
        .collect();
    print_header("Sector Allocation");
    print_table(&sectors);

    print_header("Risk Warnings");
    if report.assessment.is_clear() {
        print_success("No immediate major concentration risks detected.");
    }
    for warning in report.warnings() {
        print_warning(&describe(warning));
    }

    if !quiet {
        for row in &analysis.skipped {
            print_info(&format!(
                "Skipped line {} ({}): {}",
                row.line,
                row.symbol.as_deref().unwrap_or("-"),
                row.reason
            ));
        }
    }
}

fn describe(warning: &RiskWarning) -> String {
    let detail = match warning {
        RiskWarning::SingleStockConcentration { symbol, weight, .. } => {
            format!("{} is {} of portfolio", symbol, format_weight(*weight))
        }
        RiskWarning::SectorConcentration { sectors, .. } => sectors
            .iter()
            .map(|s| format!("{} {}", s.label(), format_weight(s.weight)))
            .collect::<Vec<_>>()
            .join(", "),
    };
    format!(
        "{}: {} (limit {})",
        warning.title(),
        detail,
        format_limit(warning.limit())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use concentra_core::SectorWeight;
    use rust_decimal_macros::dec;

    #[test]
    fn test_describe_single_stock() {
        let warning = RiskWarning::SingleStockConcentration {
            symbol: "VTI".to_string(),
            weight: dec!(0.413),
            limit: dec!(0.10),
        };
        assert_eq!(
            describe(&warning),
            "High Single Stock Concentration: VTI is 41.3% of portfolio (limit 10%)"
        );
    }

    #[test]
    fn test_describe_sector() {
        let warning = RiskWarning::SectorConcentration {
            sectors: vec![SectorWeight {
                sector: None,
                count: 2,
                value: dec!(500),
                weight: dec!(0.5),
            }],
            limit: dec!(0.25),
        };
        assert_eq!(
            describe(&warning),
            "High Sector Concentration: Unknown 50.0% (limit 25%)"
        );
    }
}
