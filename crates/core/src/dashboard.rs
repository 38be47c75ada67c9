use crate::domain::inputs::BusinessInputs;
use crate::domain::summary::{
    Alert, AlertType, DashboardSummary, FinancialMetrics, GlobalRoi, RoiDimensions, Severity,
    Trend,
};
use crate::metrics::{self, round1, MetricsSnapshot};
use crate::{panels, recommend};

/// Computes the full dashboard for one set of inputs: validate, derive the
/// KPI snapshot, evaluate the recommendation rules, build the display panels
/// and attach alerts. Pure aside from the alert timestamps.
pub fn summarize(inputs: &BusinessInputs) -> anyhow::Result<DashboardSummary> {
    inputs.validate()?;

    let snapshot = metrics::derive(inputs);
    let recommendations = recommend::generate(inputs);
    let alerts = build_alerts(&snapshot);

    Ok(DashboardSummary {
        global_roi: global_roi(inputs, &snapshot),
        financial_metrics: financial_metrics(inputs, &snapshot),
        market_data: panels::market_data(inputs, &snapshot),
        operational_metrics: panels::operational_metrics(inputs),
        customer_intelligence: panels::customer_intelligence(inputs, &snapshot),
        alerts,
        recommendations,
        revenue_history: panels::revenue_history(inputs),
        roi_history: panels::roi_history(&snapshot),
    })
}

fn global_roi(inputs: &BusinessInputs, snapshot: &MetricsSnapshot) -> GlobalRoi {
    let profit_ratio = if inputs.revenue > 0.0 {
        snapshot.net_profit / inputs.revenue
    } else {
        0.0
    };

    GlobalRoi {
        overall_score: snapshot.overall_score,
        dimensions: RoiDimensions {
            financial: snapshot.financial_score.round() as i64,
            operational: snapshot.operational_score.round() as i64,
            market: snapshot.market_score.round() as i64,
            strategic: snapshot.strategic_score.round() as i64,
        },
        burn_to_return_ratio: snapshot.burn_to_return_ratio,
        cash_runway: snapshot.cash_runway,
        margin_strength_index: snapshot.margin_strength_index,
        trend: if snapshot.net_profit > 0.0 {
            Trend::Up
        } else {
            Trend::Down
        },
        trend_percent: round1(profit_ratio * 100.0),
    }
}

fn financial_metrics(inputs: &BusinessInputs, snapshot: &MetricsSnapshot) -> FinancialMetrics {
    FinancialMetrics {
        revenue: inputs.revenue,
        expenses: inputs.expenses,
        cogs: inputs.cogs,
        opex: inputs.opex,
        capex: inputs.capex,
        net_profit: snapshot.net_profit,
        gross_margin: snapshot.gross_margin,
        ebitda: snapshot.ebitda.round(),
        burn_rate: inputs.burn_rate,
        cash_runway: snapshot.cash_runway,
        margin_strength_index: snapshot.margin_strength_index,
        tax_risk: snapshot.tax_risk,
    }
}

fn build_alerts(snapshot: &MetricsSnapshot) -> Vec<Alert> {
    let timestamp = chrono::Utc::now().to_rfc3339();

    let mut alerts = vec![Alert {
        id: "alert-cash-runway".to_string(),
        alert_type: AlertType::CashWarning,
        severity: Severity::Warning,
        title: "Cash Runway".to_string(),
        message: format!(
            "Current runway is {} months. Monitor burn rate.",
            snapshot.cash_runway
        ),
        timestamp: timestamp.clone(),
        dismissed: false,
    }];

    if snapshot.degenerate_revenue {
        alerts.push(Alert {
            id: "alert-data-quality".to_string(),
            alert_type: AlertType::Insight,
            severity: Severity::Warning,
            title: "Data Quality".to_string(),
            message: "Revenue is zero; margin-derived metrics fell back to zero. \
                      Check the entered figures."
                .to_string(),
            timestamp,
            dismissed: false,
        });
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::summary::Trend;

    #[test]
    fn assembles_summary_for_sample_inputs() {
        let summary = summarize(&BusinessInputs::sample()).unwrap();

        assert_eq!(summary.financial_metrics.net_profit, 4_360_000.0);
        assert_eq!(summary.global_roi.trend, Trend::Up);
        // trendPercent = round1(4.36M / 11.5M * 100) = 37.9
        assert_eq!(summary.global_roi.trend_percent, 37.9);
        assert_eq!(summary.global_roi.cash_runway, 123);
        assert_eq!(summary.alerts.len(), 1);
        assert!(!summary.recommendations.is_empty());
        assert_eq!(summary.revenue_history.len(), 12);
    }

    #[test]
    fn rejects_invalid_inputs_before_computing() {
        let mut inputs = BusinessInputs::sample();
        inputs.revenue = f64::NAN;
        assert!(summarize(&inputs).is_err());
    }

    #[test]
    fn zero_revenue_adds_data_quality_alert() {
        let mut inputs = BusinessInputs::sample();
        inputs.revenue = 0.0;
        let summary = summarize(&inputs).unwrap();

        assert!(summary
            .alerts
            .iter()
            .any(|a| a.id == "alert-data-quality"));
        assert!(summary.financial_metrics.gross_margin.is_finite());
        assert_eq!(summary.global_roi.trend, Trend::Down);
    }

    #[test]
    fn summary_serializes_with_original_top_level_keys() {
        let summary = summarize(&BusinessInputs::sample()).unwrap();
        let v = serde_json::to_value(&summary).unwrap();

        for key in [
            "globalRoi",
            "financialMetrics",
            "marketData",
            "operationalMetrics",
            "customerIntelligence",
            "alerts",
            "recommendations",
            "revenueHistory",
            "roiHistory",
        ] {
            assert!(v.get(key).is_some(), "missing key {key}");
        }
        assert!(v["customerIntelligence"].get("ltvCacRatio").is_some());
        assert!(v["globalRoi"].get("burnToReturnRatio").is_some());
    }
}
