use crate::domain::inputs::BusinessInputs;
use crate::domain::summary::{
    AcquisitionChannel, Bottleneck, BottleneckSeverity, ChurnSignal, CompetitorPrice,
    CustomerIntelligence, CustomerSegment, DemandPoint, MarketData, OperationalMetrics, RiskLevel,
    SeasonalPattern, TimeSeriesPoint, TrendDirection,
};
use crate::metrics::MetricsSnapshot;

// Illustrative dashboard panels layered on top of the derived metrics. The
// fixed ratios and series shapes here are display filler, not a contract.
// The original sampled Math.random() for the time series; we draw from a
// splitmix64 stream seeded by the input bits instead so that repeated reads
// of the same inputs are bit-identical.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

struct Jitter(u64);

impl Jitter {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform draw in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn seed_from(inputs: &BusinessInputs) -> u64 {
    let mut seed = 0x424E_4F53u64; // crate tag, keeps the zero-input seed nonzero
    for v in [
        inputs.revenue,
        inputs.expenses,
        inputs.cogs,
        inputs.opex,
        inputs.capex,
        inputs.burn_rate,
        inputs.employees,
        inputs.customers,
        inputs.cac,
        inputs.ltv,
        inputs.retention_rate,
        inputs.churn_rate,
    ] {
        seed = seed.rotate_left(7) ^ v.to_bits();
    }
    seed
}

pub fn market_data(inputs: &BusinessInputs, snapshot: &MetricsSnapshot) -> MarketData {
    let mut jitter = Jitter::new(seed_from(inputs));

    let demand_trends = MONTHS
        .iter()
        .map(|month| DemandPoint {
            month: (*month).to_string(),
            demand: (200.0 + inputs.revenue / 12_000.0 + jitter.next_f64() * 100.0).round() as i64,
        })
        .collect();

    MarketData {
        opportunity_score: snapshot.market_score.round() as i64,
        price_sensitivity_index: 0.68,
        trend_direction: TrendDirection::Bullish,
        competitor_pricing: vec![
            competitor("CompetitorA", 899.0, 5.0),
            competitor("CompetitorB", 749.0, -3.0),
            competitor("CompetitorC", 1199.0, 0.0),
            competitor("CompetitorD", 649.0, 8.0),
        ],
        demand_trends,
        seasonal_patterns: vec![
            seasonal("Q1", 82),
            seasonal("Q2", 95),
            seasonal("Q3", 88),
            seasonal("Q4", 115),
        ],
    }
}

pub fn operational_metrics(inputs: &BusinessInputs) -> OperationalMetrics {
    let productivity_score =
        ((inputs.revenue / (inputs.employees.max(1.0) * 50_000.0)) * 100.0).min(100.0);

    OperationalMetrics {
        productivity_score,
        cost_to_serve: (inputs.expenses / inputs.customers.max(1.0)).round() as i64,
        delivery_sla_health: 94.2,
        process_efficiency: 82.5,
        inventory_rotation: 8.4,
        supply_chain_health: 88.0,
        bottlenecks: vec![
            bottleneck("Customer Onboarding", BottleneckSeverity::Medium, 12.5),
            bottleneck("Invoice Processing", BottleneckSeverity::Low, 5.2),
            bottleneck("Support Ticket Resolution", BottleneckSeverity::High, 18.8),
        ],
    }
}

pub fn customer_intelligence(
    inputs: &BusinessInputs,
    snapshot: &MetricsSnapshot,
) -> CustomerIntelligence {
    let segment = |name: &str, customer_share: f64, revenue_share: f64, profitability: i64| {
        CustomerSegment {
            name: name.to_string(),
            customers: (inputs.customers * customer_share).round() as i64,
            revenue: (inputs.revenue * revenue_share).round() as i64,
            profitability,
        }
    };

    CustomerIntelligence {
        cac: inputs.cac,
        ltv: inputs.ltv,
        ltv_cac_ratio: snapshot.ltv_cac_ratio,
        retention_rate: inputs.retention_rate,
        churn_rate: inputs.churn_rate,
        nps: 42,
        segments: vec![
            segment("Enterprise", 0.03, 0.42, 68),
            segment("Mid-Market", 0.09, 0.26, 55),
            segment("SMB", 0.38, 0.19, 42),
            segment("Startup", 0.50, 0.13, 35),
        ],
        channels: vec![
            channel("Direct Sales", 180, 162_000, 28),
            channel("Inbound", 450, 67_500, 12),
            channel("Partner", 120, 48_000, 35),
            channel("Referral", 280, 28_000, 45),
        ],
        churn_signals: vec![
            churn_signal("Decreased Login Frequency", RiskLevel::High, 85),
            churn_signal("Support Ticket Surge", RiskLevel::Medium, 42),
            churn_signal("Feature Underutilization", RiskLevel::Low, 120),
        ],
    }
}

pub fn revenue_history(inputs: &BusinessInputs) -> Vec<TimeSeriesPoint> {
    // Offset the stream so this series does not mirror the demand trend.
    let mut jitter = Jitter::new(seed_from(inputs) ^ 0x5245_5648);

    MONTHS
        .iter()
        .map(|month| TimeSeriesPoint {
            date: format!("{month} 25"),
            value: (inputs.revenue / 12.0 + jitter.next_f64() * inputs.revenue * 0.1).round(),
        })
        .collect()
}

pub fn roi_history(snapshot: &MetricsSnapshot) -> Vec<TimeSeriesPoint> {
    (0..12)
        .map(|_| TimeSeriesPoint {
            date: "Monthly".to_string(),
            value: snapshot.overall_score as f64,
        })
        .collect()
}

fn competitor(name: &str, price: f64, change: f64) -> CompetitorPrice {
    CompetitorPrice {
        competitor: name.to_string(),
        price,
        change,
    }
}

fn seasonal(quarter: &str, performance: i64) -> SeasonalPattern {
    SeasonalPattern {
        quarter: quarter.to_string(),
        performance,
    }
}

fn bottleneck(process: &str, severity: BottleneckSeverity, impact: f64) -> Bottleneck {
    Bottleneck {
        process: process.to_string(),
        severity,
        impact,
    }
}

fn channel(name: &str, acquisitions: i64, cost: i64, conversion: i64) -> AcquisitionChannel {
    AcquisitionChannel {
        name: name.to_string(),
        acquisitions,
        cost,
        conversion,
    }
}

fn churn_signal(signal: &str, risk: RiskLevel, affected_customers: i64) -> ChurnSignal {
    ChurnSignal {
        signal: signal.to_string(),
        risk,
        affected_customers,
    }
}
