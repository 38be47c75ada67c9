use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Wire types for the dashboard. Field names serialize in camelCase to match
// the JSON contract consumed by the frontend.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Scale,
    Optimize,
    Monitor,
    Test,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    TaxRisk,
    CashWarning,
    Overspend,
    Opportunity,
    Insight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BottleneckSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastType {
    Pricing,
    Scaling,
    Hiring,
    Marketing,
    ProductLaunch,
}

/// The four normalized [0, 100] sub-scores summarizing business health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiDimensions {
    pub financial: i64,
    pub operational: i64,
    pub market: i64,
    pub strategic: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalRoi {
    pub overall_score: i64,
    pub dimensions: RoiDimensions,
    pub burn_to_return_ratio: f64,
    pub cash_runway: i64,
    pub margin_strength_index: f64,
    pub trend: Trend,
    pub trend_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub revenue: f64,
    pub expenses: f64,
    pub cogs: f64,
    pub opex: f64,
    pub capex: f64,
    pub net_profit: f64,
    pub gross_margin: f64,
    pub ebitda: f64,
    pub burn_rate: f64,
    pub cash_runway: i64,
    pub margin_strength_index: f64,
    pub tax_risk: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorPrice {
    pub competitor: String,
    pub price: f64,
    pub change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandPoint {
    pub month: String,
    pub demand: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalPattern {
    pub quarter: String,
    pub performance: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub opportunity_score: i64,
    pub price_sensitivity_index: f64,
    pub trend_direction: TrendDirection,
    pub competitor_pricing: Vec<CompetitorPrice>,
    pub demand_trends: Vec<DemandPoint>,
    pub seasonal_patterns: Vec<SeasonalPattern>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bottleneck {
    pub process: String,
    pub severity: BottleneckSeverity,
    pub impact: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalMetrics {
    pub productivity_score: f64,
    pub cost_to_serve: i64,
    pub delivery_sla_health: f64,
    pub process_efficiency: f64,
    pub inventory_rotation: f64,
    pub supply_chain_health: f64,
    pub bottlenecks: Vec<Bottleneck>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSegment {
    pub name: String,
    pub customers: i64,
    pub revenue: i64,
    pub profitability: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionChannel {
    pub name: String,
    pub acquisitions: i64,
    pub cost: i64,
    pub conversion: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurnSignal {
    pub signal: String,
    pub risk: RiskLevel,
    pub affected_customers: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerIntelligence {
    pub cac: f64,
    pub ltv: f64,
    pub ltv_cac_ratio: f64,
    pub retention_rate: f64,
    pub churn_rate: f64,
    pub nps: i64,
    pub segments: Vec<CustomerSegment>,
    pub channels: Vec<AcquisitionChannel>,
    pub churn_signals: Vec<ChurnSignal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub dismissed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationMetric {
    pub name: String,
    pub current: f64,
    pub projected: f64,
}

/// One advisory entry produced by the rule engine. Regenerated in full on
/// every evaluation; never persisted or mutated across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub action: Action,
    pub title: String,
    pub description: String,
    pub expected_roi_impact: f64,
    pub reasoning: String,
    pub time_to_result: String,
    /// 1 is most urgent, 5 least.
    pub priority: i32,
    pub category: String,
    pub metrics: Vec<RecommendationMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub global_roi: GlobalRoi,
    pub financial_metrics: FinancialMetrics,
    pub market_data: MarketData,
    pub operational_metrics: OperationalMetrics,
    pub customer_intelligence: CustomerIntelligence,
    pub alerts: Vec<Alert>,
    pub recommendations: Vec<Recommendation>,
    pub revenue_history: Vec<TimeSeriesPoint>,
    pub roi_history: Vec<TimeSeriesPoint>,
}

// Sample collections served by the list endpoints. These are static display
// fixtures, not derived data.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    pub roi_score: i64,
    pub roi_dimensions: RoiDimensions,
    pub revenue: f64,
    pub expenses: f64,
    pub headcount: i64,
    pub trend: Trend,
    pub trend_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub roi_score: i64,
    pub revenue: f64,
    pub cost: f64,
    pub margin: f64,
    pub units_sold: i64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub channel: String,
    pub roi_score: i64,
    pub spend: f64,
    pub revenue: f64,
    pub conversions: i64,
    pub cpa: f64,
    pub status: CampaignStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: String,
    pub role: String,
    pub productivity_score: i64,
    pub cost_to_serve: f64,
    pub revenue_generated: f64,
    pub tenure: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub value: f64,
    pub roi_score: i64,
    pub utilization: f64,
    pub maintenance_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastScenario {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub forecast_type: ForecastType,
    pub parameters: BTreeMap<String, f64>,
    pub expected_roi: f64,
    pub risk_level: RiskLevel,
    pub time_to_breakeven: f64,
    pub revenue_impact: f64,
    pub confidence_level: f64,
}
