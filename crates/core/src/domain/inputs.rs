use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// Raw business figures supplied by the caller. A fresh dashboard is computed
/// from these on every read; nothing derived is persisted.
///
/// All fields are non-negative finite numbers. `retention_rate` and
/// `churn_rate` are percentages in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInputs {
    pub revenue: f64,
    pub expenses: f64,
    pub cogs: f64,
    pub opex: f64,
    pub capex: f64,
    pub burn_rate: f64,
    pub employees: f64,
    pub customers: f64,
    pub cac: f64,
    pub ltv: f64,
    pub retention_rate: f64,
    pub churn_rate: f64,
}

impl BusinessInputs {
    /// Fail-fast validation: rejects non-finite or negative values before any
    /// metric is computed. Zero revenue is allowed and handled downstream as a
    /// degenerate input rather than an error.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in self.fields() {
            ensure!(
                value.is_finite(),
                "{name} must be a finite number (got {value})"
            );
            ensure!(value >= 0.0, "{name} must be non-negative (got {value})");
        }

        for (name, value) in [
            ("retentionRate", self.retention_rate),
            ("churnRate", self.churn_rate),
        ] {
            ensure!(
                value <= 100.0,
                "{name} is a percentage and must be at most 100 (got {value})"
            );
        }

        Ok(())
    }

    fn fields(&self) -> [(&'static str, f64); 12] {
        [
            ("revenue", self.revenue),
            ("expenses", self.expenses),
            ("cogs", self.cogs),
            ("opex", self.opex),
            ("capex", self.capex),
            ("burnRate", self.burn_rate),
            ("employees", self.employees),
            ("customers", self.customers),
            ("cac", self.cac),
            ("ltv", self.ltv),
            ("retentionRate", self.retention_rate),
            ("churnRate", self.churn_rate),
        ]
    }

    /// The default dataset shown before the user enters their own numbers.
    pub fn sample() -> Self {
        Self {
            revenue: 11_500_000.0,
            expenses: 7_140_000.0,
            cogs: 3_450_000.0,
            opex: 2_890_000.0,
            capex: 800_000.0,
            burn_rate: 425_000.0,
            employees: 150.0,
            customers: 4815.0,
            cac: 485.0,
            ltv: 4200.0,
            retention_rate: 92.5,
            churn_rate: 7.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_passes_validation() {
        BusinessInputs::sample().validate().unwrap();
    }

    #[test]
    fn zero_revenue_is_accepted() {
        let mut inputs = BusinessInputs::sample();
        inputs.revenue = 0.0;
        inputs.validate().unwrap();
    }

    #[test]
    fn rejects_negative_values() {
        let mut inputs = BusinessInputs::sample();
        inputs.expenses = -1.0;
        let err = inputs.validate().unwrap_err();
        assert!(err.to_string().contains("expenses"));
    }

    #[test]
    fn rejects_non_finite_values() {
        let mut inputs = BusinessInputs::sample();
        inputs.cac = f64::NAN;
        assert!(inputs.validate().is_err());

        inputs.cac = f64::INFINITY;
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn rejects_percentages_above_100() {
        let mut inputs = BusinessInputs::sample();
        inputs.churn_rate = 120.0;
        let err = inputs.validate().unwrap_err();
        assert!(err.to_string().contains("churnRate"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let v = serde_json::to_value(BusinessInputs::sample()).unwrap();
        assert!(v.get("burnRate").is_some());
        assert!(v.get("retentionRate").is_some());
        assert!(v.get("burn_rate").is_none());
    }

    #[test]
    fn deserializes_from_original_wire_shape() {
        let v = serde_json::json!({
            "revenue": 1_000_000.0,
            "expenses": 950_000.0,
            "cogs": 700_000.0,
            "opex": 100_000.0,
            "capex": 0.0,
            "burnRate": 20_000.0,
            "employees": 50.0,
            "customers": 800.0,
            "cac": 600.0,
            "ltv": 900.0,
            "retentionRate": 85.0,
            "churnRate": 15.0,
        });
        let inputs: BusinessInputs = serde_json::from_value(v).unwrap();
        assert_eq!(inputs.employees, 50.0);
        assert_eq!(inputs.burn_rate, 20_000.0);
    }
}
