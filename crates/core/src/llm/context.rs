use crate::domain::summary::DashboardSummary;
use crate::numfmt::thousands;
use std::fmt::Write;

/// Renders the dashboard into the plain-text context block appended to the
/// user's chat message, so the assistant can reference live figures.
pub fn render(summary: &DashboardSummary) -> String {
    let mut out = String::from("\n\nCurrent Business Context:\n");

    let roi = &summary.global_roi;
    let _ = writeln!(out, "- Overall ROI Score: {}/100", roi.overall_score);
    let _ = writeln!(out, "- Financial ROI: {}/100", roi.dimensions.financial);
    let _ = writeln!(out, "- Operational ROI: {}/100", roi.dimensions.operational);
    let _ = writeln!(out, "- Market ROI: {}/100", roi.dimensions.market);
    let _ = writeln!(out, "- Strategic ROI: {}/100", roi.dimensions.strategic);

    let fin = &summary.financial_metrics;
    let _ = writeln!(out, "- Revenue: ${}", thousands(fin.revenue));
    let _ = writeln!(out, "- Net Profit: ${}", thousands(fin.net_profit));
    let _ = writeln!(out, "- Gross Margin: {:.1}%", fin.gross_margin * 100.0);
    let _ = writeln!(out, "- Cash Runway: {} months", fin.cash_runway);

    let ci = &summary.customer_intelligence;
    let _ = writeln!(out, "- CAC: ${}", thousands(ci.cac));
    let _ = writeln!(out, "- LTV: ${}", thousands(ci.ltv));
    let _ = writeln!(out, "- LTV/CAC Ratio: {:.2}x", ci.ltv_cac_ratio);
    let _ = writeln!(out, "- Retention Rate: {}%", ci.retention_rate);

    out
}
