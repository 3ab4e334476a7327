//! Markdown report renderer.

use super::number::{format_limit, format_money, format_weight};
use crate::analytics::{RiskReport, RiskWarning};

/// Prefix for every warning line.
pub const WARNING_MARKER: &str = "⚠️";

/// Line emitted when no limit was breached.
pub const NO_RISK_LINE: &str = "- No immediate major concentration risks detected.";

/// Renders a report as a markdown document.
///
/// Sections appear in fixed order: title, total value, top holdings, sector
/// allocation, risk warnings. Lines are joined with `\n` and there is no
/// trailing newline.
#[must_use]
pub fn render_markdown(report: &RiskReport, label: &str) -> String {
    let mut out = vec![format!("## Portfolio Analysis for {label}"), String::new()];
    out.push(format!("**Total Value:** {}", format_money(report.total_value)));
    out.push(String::new());

    out.push(format!("### Top {} Holdings (Concentration risk)", report.top_n));
    for h in &report.top_holdings {
        out.push(format!(
            "- **{}**: {} ({})",
            h.symbol,
            format_weight(h.weight),
            format_money(h.value)
        ));
    }

    out.push(String::new());
    out.push("### Sector Allocation".to_string());
    for s in &report.sector_allocation {
        out.push(format!("- **{}**: {}", s.label(), format_weight(s.weight)));
    }

    out.push(String::new());
    out.push("### Risk Warnings".to_string());
    if report.assessment.is_clear() {
        out.push(NO_RISK_LINE.to_string());
    } else {
        out.extend(report.warnings().iter().map(warning_line));
    }

    out.join("\n")
}

/// Renders one warning as a markdown list item.
#[must_use]
pub fn warning_line(warning: &RiskWarning) -> String {
    let detail = match warning {
        RiskWarning::SingleStockConcentration { symbol, limit, .. } => {
            format!("{symbol} is >{} of portfolio.", format_limit(*limit))
        }
        RiskWarning::SectorConcentration { limit, .. } => format!(
            "One or more sectors make up >{} of portfolio.",
            format_limit(*limit)
        ),
    };
    format!("- {WARNING_MARKER} **{}**: {detail}", warning.title())
}
