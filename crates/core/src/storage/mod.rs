pub mod fixtures;

use crate::dashboard;
use crate::domain::inputs::BusinessInputs;
use crate::domain::summary::{
    Asset, Campaign, DashboardSummary, Department, Employee, ForecastScenario, Product,
};
use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock};

/// Injected data provider for the API layer. The computation core never
/// reads this directly; callers load inputs from the store and pass them to
/// the pure functions.
pub trait DashboardStore: Send + Sync {
    fn load_inputs(&self) -> BusinessInputs;

    fn save_inputs(&self, inputs: BusinessInputs) -> anyhow::Result<()>;

    /// Records an alert id as dismissed. Dismissal is display state only; it
    /// never changes what the engine computes.
    fn dismiss_alert(&self, id: &str);

    fn dismissed_alerts(&self) -> Vec<String>;

    fn departments(&self) -> Vec<Department>;
    fn products(&self) -> Vec<Product>;
    fn campaigns(&self) -> Vec<Campaign>;
    fn employees(&self) -> Vec<Employee>;
    fn assets(&self) -> Vec<Asset>;
    fn forecasts(&self) -> Vec<ForecastScenario>;

    /// Computes a fresh summary from the stored inputs and applies recorded
    /// dismissals to the generated alerts.
    fn summary(&self) -> anyhow::Result<DashboardSummary> {
        let inputs = self.load_inputs();
        let mut summary = dashboard::summarize(&inputs)?;

        let dismissed = self.dismissed_alerts();
        for alert in &mut summary.alerts {
            if dismissed.iter().any(|id| id == &alert.id) {
                alert.dismissed = true;
            }
        }

        Ok(summary)
    }
}

/// In-memory store: the current inputs plus the set of dismissed alert ids.
/// Fixture collections are static sample rows.
pub struct MemoryStore {
    inputs: RwLock<BusinessInputs>,
    dismissed: RwLock<BTreeSet<String>>,
}

impl MemoryStore {
    pub fn new(inputs: BusinessInputs) -> Self {
        Self {
            inputs: RwLock::new(inputs),
            dismissed: RwLock::new(BTreeSet::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(BusinessInputs::sample())
    }
}

impl DashboardStore for MemoryStore {
    fn load_inputs(&self) -> BusinessInputs {
        *self
            .inputs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn save_inputs(&self, inputs: BusinessInputs) -> anyhow::Result<()> {
        inputs.validate()?;
        *self
            .inputs
            .write()
            .unwrap_or_else(PoisonError::into_inner) = inputs;
        Ok(())
    }

    fn dismiss_alert(&self, id: &str) {
        self.dismissed
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.to_string());
    }

    fn dismissed_alerts(&self) -> Vec<String> {
        self.dismissed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    fn departments(&self) -> Vec<Department> {
        fixtures::departments()
    }

    fn products(&self) -> Vec<Product> {
        fixtures::products()
    }

    fn campaigns(&self) -> Vec<Campaign> {
        fixtures::campaigns()
    }

    fn employees(&self) -> Vec<Employee> {
        fixtures::employees()
    }

    fn assets(&self) -> Vec<Asset> {
        fixtures::assets()
    }

    fn forecasts(&self) -> Vec<ForecastScenario> {
        fixtures::forecasts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let store = MemoryStore::default();
        let mut inputs = BusinessInputs::sample();
        inputs.revenue = 2_000_000.0;

        store.save_inputs(inputs).unwrap();
        assert_eq!(store.load_inputs(), inputs);
    }

    #[test]
    fn save_rejects_invalid_inputs_and_keeps_previous() {
        let store = MemoryStore::default();
        let before = store.load_inputs();

        let mut bad = before;
        bad.employees = -3.0;
        assert!(store.save_inputs(bad).is_err());
        assert_eq!(store.load_inputs(), before);
    }

    #[test]
    fn dismissal_marks_only_the_dismissed_alert() {
        let mut inputs = BusinessInputs::sample();
        inputs.revenue = 0.0; // two alerts: cash runway + data quality
        let store = MemoryStore::new(inputs);

        store.dismiss_alert("alert-data-quality");
        let summary = store.summary().unwrap();

        let by_id = |id: &str| summary.alerts.iter().find(|a| a.id == id).unwrap();
        assert!(by_id("alert-data-quality").dismissed);
        assert!(!by_id("alert-cash-runway").dismissed);
    }

    #[test]
    fn summary_reflects_saved_inputs() {
        let store = MemoryStore::default();
        let mut inputs = BusinessInputs::sample();
        inputs.expenses = inputs.revenue + 1_000_000.0;
        store.save_inputs(inputs).unwrap();

        let summary = store.summary().unwrap();
        assert!(summary.financial_metrics.net_profit < 0.0);
        assert_eq!(summary.global_roi.cash_runway, 0);
    }

    #[test]
    fn fixture_collections_are_not_empty() {
        let store = MemoryStore::default();
        assert!(!store.departments().is_empty());
        assert!(!store.products().is_empty());
        assert!(!store.campaigns().is_empty());
        assert!(!store.employees().is_empty());
        assert!(!store.assets().is_empty());
        assert!(!store.forecasts().is_empty());
    }
}
