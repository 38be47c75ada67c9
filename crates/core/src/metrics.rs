use crate::domain::inputs::BusinessInputs;

/// Revenue-per-employee level that maps operational efficiency to a full
/// score of 100.
const REVENUE_PER_EMPLOYEE_SCALE: f64 = 50_000.0;

/// Derived KPI tree for one set of inputs. Recomputed on every read; there is
/// no way to mutate a snapshot other than changing the inputs and deriving
/// again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    pub net_profit: f64,
    /// Fraction in 0..=1, zero-fallback when revenue is zero.
    pub gross_margin: f64,
    /// Simplified as netProfit + 0.2 * opex; not a GAAP figure.
    pub ebitda: f64,
    /// Months, floored at zero.
    pub cash_runway: i64,
    /// grossMargin * 100 at one decimal.
    pub margin_strength_index: f64,
    pub ltv_cac_ratio: f64,
    /// Monthly burn over monthly revenue, two decimals.
    pub burn_to_return_ratio: f64,
    pub tax_risk: f64,
    pub financial_score: f64,
    pub operational_score: f64,
    pub market_score: f64,
    pub strategic_score: f64,
    /// Rounded mean of the four dimension scores.
    pub overall_score: i64,
    /// Set when revenue was zero and margin figures fell back to zero. The
    /// assembler surfaces this as a data-quality alert.
    pub degenerate_revenue: bool,
}

/// Deterministic, side-effect-free derivation of the full KPI tree.
///
/// Denominators drawn from `cac` are floored at 1; `employees` and
/// `customers` are guarded explicitly. Zero revenue does not error: the
/// margin-derived figures fall back to zero and the snapshot is flagged so
/// callers can surface the data-quality condition.
pub fn derive(inputs: &BusinessInputs) -> MetricsSnapshot {
    let degenerate_revenue = inputs.revenue <= 0.0;

    let net_profit = inputs.revenue - inputs.expenses;
    let gross_margin = if degenerate_revenue {
        0.0
    } else {
        (inputs.revenue - inputs.cogs) / inputs.revenue
    };
    let profit_ratio = if degenerate_revenue {
        0.0
    } else {
        net_profit / inputs.revenue
    };

    let ebitda = net_profit + inputs.opex * 0.2;
    let cash_runway = (((net_profit * 12.0) / inputs.burn_rate.max(1.0)).floor() as i64).max(0);
    let margin_strength_index = round1(gross_margin * 100.0);
    let ltv_cac_ratio = inputs.ltv / inputs.cac.max(1.0);
    let burn_to_return_ratio = round2(inputs.burn_rate / (inputs.revenue / 12.0).max(1.0));

    let financial_score = (profit_ratio * 100.0 + 50.0).clamp(0.0, 100.0);
    let operational_score = if inputs.employees > 0.0 {
        ((inputs.revenue / inputs.employees) / REVENUE_PER_EMPLOYEE_SCALE * 100.0).clamp(0.0, 100.0)
    } else {
        50.0
    };
    let market_score = (ltv_cac_ratio * 10.0).clamp(0.0, 100.0);
    let strategic_score = (inputs.retention_rate + 50.0).clamp(0.0, 100.0);
    let overall_score =
        ((financial_score + operational_score + market_score + strategic_score) / 4.0).round()
            as i64;

    let tax_risk = (35.0 - profit_ratio * 10.0).clamp(0.0, 100.0);

    MetricsSnapshot {
        net_profit,
        gross_margin,
        ebitda,
        cash_runway,
        margin_strength_index,
        ltv_cac_ratio,
        burn_to_return_ratio,
        tax_risk,
        financial_score,
        operational_score,
        market_score,
        strategic_score,
        overall_score,
        degenerate_revenue,
    }
}

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_expected_figures_for_sample_inputs() {
        let snapshot = derive(&BusinessInputs::sample());

        assert_eq!(snapshot.net_profit, 4_360_000.0);
        assert!((snapshot.gross_margin - 0.7).abs() < 1e-9);
        assert!((snapshot.ltv_cac_ratio - 8.66).abs() < 0.01);
        assert_eq!(snapshot.margin_strength_index, 70.0);
        // netProfit * 12 / burnRate = 52_320_000 / 425_000 = 123.1 -> 123
        assert_eq!(snapshot.cash_runway, 123);
        assert!(!snapshot.degenerate_revenue);
    }

    #[test]
    fn derivation_is_deterministic() {
        let inputs = BusinessInputs::sample();
        assert_eq!(derive(&inputs), derive(&inputs));
    }

    #[test]
    fn dimension_scores_stay_bounded() {
        let extremes = [
            BusinessInputs::sample(),
            BusinessInputs {
                revenue: 1e12,
                expenses: 0.0,
                cogs: 0.0,
                opex: 0.0,
                capex: 0.0,
                burn_rate: 0.0,
                employees: 1.0,
                customers: 1.0,
                cac: 0.0,
                ltv: 1e9,
                retention_rate: 100.0,
                churn_rate: 0.0,
            },
            BusinessInputs {
                revenue: 100.0,
                expenses: 1e9,
                cogs: 1e9,
                opex: 0.0,
                capex: 0.0,
                burn_rate: 1e9,
                employees: 0.0,
                customers: 0.0,
                cac: 1.0,
                ltv: 0.0,
                retention_rate: 0.0,
                churn_rate: 100.0,
            },
        ];

        for inputs in extremes {
            let s = derive(&inputs);
            for score in [
                s.financial_score,
                s.operational_score,
                s.market_score,
                s.strategic_score,
            ] {
                assert!((0.0..=100.0).contains(&score), "score out of bounds: {score}");
            }
            assert!((0..=100).contains(&s.overall_score));
            assert!((0.0..=100.0).contains(&s.tax_risk));
        }
    }

    #[test]
    fn cash_runway_never_negative() {
        let mut inputs = BusinessInputs::sample();
        inputs.expenses = inputs.revenue + 5_000_000.0;
        let snapshot = derive(&inputs);
        assert!(snapshot.net_profit < 0.0);
        assert_eq!(snapshot.cash_runway, 0);
    }

    #[test]
    fn zero_revenue_produces_no_nan_and_flags_degenerate_input() {
        let mut inputs = BusinessInputs::sample();
        inputs.revenue = 0.0;
        let s = derive(&inputs);

        assert!(s.degenerate_revenue);
        assert_eq!(s.gross_margin, 0.0);
        for v in [
            s.net_profit,
            s.gross_margin,
            s.ebitda,
            s.margin_strength_index,
            s.ltv_cac_ratio,
            s.burn_to_return_ratio,
            s.tax_risk,
            s.financial_score,
            s.operational_score,
            s.market_score,
            s.strategic_score,
        ] {
            assert!(v.is_finite(), "non-finite metric: {v}");
        }
    }

    #[test]
    fn zero_cac_denominator_is_floored() {
        let mut inputs = BusinessInputs::sample();
        inputs.cac = 0.0;
        let s = derive(&inputs);
        assert_eq!(s.ltv_cac_ratio, inputs.ltv);
    }

    #[test]
    fn zero_employees_takes_neutral_operational_score() {
        let mut inputs = BusinessInputs::sample();
        inputs.employees = 0.0;
        let s = derive(&inputs);
        assert_eq!(s.operational_score, 50.0);
    }
}
