use crate::domain::summary::{
    Asset, Campaign, CampaignStatus, Department, Employee, ForecastScenario, ForecastType, Product,
    RiskLevel, RoiDimensions, Trend,
};
use std::collections::BTreeMap;

// Fabricated sample rows behind the list endpoints. No algorithm here; the
// figures only need to look plausible next to the computed dashboard.

pub fn departments() -> Vec<Department> {
    let dept = |id: &str,
                name: &str,
                roi_score: i64,
                dims: [i64; 4],
                revenue: f64,
                expenses: f64,
                headcount: i64,
                trend: Trend,
                trend_percent: f64| Department {
        id: id.to_string(),
        name: name.to_string(),
        roi_score,
        roi_dimensions: RoiDimensions {
            financial: dims[0],
            operational: dims[1],
            market: dims[2],
            strategic: dims[3],
        },
        revenue,
        expenses,
        headcount,
        trend,
        trend_percent,
    };

    vec![
        dept("dept-1", "Engineering", 82, [78, 88, 75, 87], 2_450_000.0, 1_850_000.0, 45, Trend::Up, 12.5),
        dept("dept-2", "Sales", 76, [85, 72, 80, 68], 4_200_000.0, 2_100_000.0, 32, Trend::Up, 8.3),
        dept("dept-3", "Marketing", 68, [62, 70, 78, 62], 1_800_000.0, 1_200_000.0, 18, Trend::Stable, 2.1),
        dept("dept-4", "Operations", 71, [68, 82, 60, 74], 980_000.0, 720_000.0, 28, Trend::Up, 5.7),
        dept("dept-5", "Customer Success", 79, [72, 85, 82, 76], 1_650_000.0, 890_000.0, 22, Trend::Up, 9.2),
        dept("dept-6", "Finance", 65, [75, 68, 52, 65], 420_000.0, 380_000.0, 12, Trend::Stable, 1.4),
    ]
}

pub fn products() -> Vec<Product> {
    let product = |id: &str,
                   name: &str,
                   category: &str,
                   roi_score: i64,
                   revenue: f64,
                   cost: f64,
                   margin: f64,
                   units_sold: i64,
                   trend: Trend| Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        roi_score,
        revenue,
        cost,
        margin,
        units_sold,
        trend,
    };

    vec![
        product("prod-1", "Enterprise Suite", "Software", 88, 3_200_000.0, 1_280_000.0, 60.0, 245, Trend::Up),
        product("prod-2", "Professional Plan", "Subscription", 82, 1_850_000.0, 555_000.0, 70.0, 1420, Trend::Up),
        product("prod-3", "Starter Package", "Subscription", 72, 680_000.0, 272_000.0, 60.0, 3200, Trend::Stable),
        product("prod-4", "API Access", "Service", 91, 920_000.0, 184_000.0, 80.0, 680, Trend::Up),
        product("prod-5", "Consulting Services", "Service", 65, 480_000.0, 312_000.0, 35.0, 48, Trend::Down),
        product("prod-6", "Training Programs", "Education", 58, 220_000.0, 132_000.0, 40.0, 890, Trend::Stable),
    ]
}

pub fn campaigns() -> Vec<Campaign> {
    let campaign = |id: &str,
                    name: &str,
                    channel: &str,
                    roi_score: i64,
                    spend: f64,
                    revenue: f64,
                    conversions: i64,
                    cpa: f64,
                    status: CampaignStatus| Campaign {
        id: id.to_string(),
        name: name.to_string(),
        channel: channel.to_string(),
        roi_score,
        spend,
        revenue,
        conversions,
        cpa,
        status,
    };

    vec![
        campaign("camp-1", "Q4 Product Launch", "Multi-channel", 85, 180_000.0, 720_000.0, 1240, 145.16, CampaignStatus::Active),
        campaign("camp-2", "LinkedIn B2B", "Social", 78, 45_000.0, 198_000.0, 320, 140.63, CampaignStatus::Active),
        campaign("camp-3", "Google Ads SEM", "Paid Search", 72, 85_000.0, 340_000.0, 580, 146.55, CampaignStatus::Active),
        campaign("camp-4", "Content Marketing", "Organic", 81, 32_000.0, 145_000.0, 890, 35.96, CampaignStatus::Active),
        campaign("camp-5", "Email Nurture", "Email", 88, 12_000.0, 98_000.0, 420, 28.57, CampaignStatus::Completed),
        campaign("camp-6", "Industry Webinars", "Events", 62, 28_000.0, 65_000.0, 180, 155.56, CampaignStatus::Paused),
    ]
}

pub fn employees() -> Vec<Employee> {
    const DEPARTMENTS: [&str; 6] = [
        "Engineering",
        "Sales",
        "Marketing",
        "Operations",
        "Customer Success",
        "Finance",
    ];
    const ROLES: [&str; 5] = ["Manager", "Senior", "Lead", "Specialist", "Analyst"];

    // Fixed pseudo-spread instead of the original's random draw; repeated
    // reads must return the same rows.
    (0..20)
        .map(|i| Employee {
            id: format!("emp-{}", i + 1),
            name: format!("Employee {}", i + 1),
            department: DEPARTMENTS[i % DEPARTMENTS.len()].to_string(),
            role: ROLES[i % ROLES.len()].to_string(),
            productivity_score: 60 + ((i as i64 * 13) % 35),
            cost_to_serve: 4500.0 + ((i as i64 * 531) % 3000) as f64,
            revenue_generated: 25_000.0 + ((i as i64 * 9173) % 75_000) as f64,
            tenure: 1 + ((i as i64 * 3) % 8),
        })
        .collect()
}

pub fn assets() -> Vec<Asset> {
    let asset = |id: &str,
                 name: &str,
                 asset_type: &str,
                 value: f64,
                 roi_score: i64,
                 utilization: f64,
                 maintenance_cost: f64| Asset {
        id: id.to_string(),
        name: name.to_string(),
        asset_type: asset_type.to_string(),
        value,
        roi_score,
        utilization,
        maintenance_cost,
    };

    vec![
        asset("asset-1", "Cloud Infrastructure", "Technology", 850_000.0, 85, 78.0, 42_000.0),
        asset("asset-2", "Office Space HQ", "Real Estate", 2_200_000.0, 62, 65.0, 180_000.0),
        asset("asset-3", "Development Tools", "Software", 120_000.0, 92, 95.0, 24_000.0),
        asset("asset-4", "Sales Automation", "Software", 85_000.0, 78, 82.0, 18_000.0),
    ]
}

pub fn forecasts() -> Vec<ForecastScenario> {
    let params = |pairs: &[(&str, f64)]| -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    };

    vec![
        ForecastScenario {
            id: "forecast-1".to_string(),
            name: "Price Increase 15%".to_string(),
            forecast_type: ForecastType::Pricing,
            parameters: params(&[("priceChange", 15.0), ("volumeImpact", -8.0)]),
            expected_roi: 22.5,
            risk_level: RiskLevel::Medium,
            time_to_breakeven: 4.0,
            revenue_impact: 480_000.0,
            confidence_level: 72.0,
        },
        ForecastScenario {
            id: "forecast-2".to_string(),
            name: "Engineering Scale-up".to_string(),
            forecast_type: ForecastType::Scaling,
            parameters: params(&[("capacityIncrease", 50.0), ("investment", 350_000.0)]),
            expected_roi: 35.2,
            risk_level: RiskLevel::Medium,
            time_to_breakeven: 8.0,
            revenue_impact: 1_200_000.0,
            confidence_level: 68.0,
        },
        ForecastScenario {
            id: "forecast-3".to_string(),
            name: "Marketing Budget 2x".to_string(),
            forecast_type: ForecastType::Marketing,
            parameters: params(&[("budgetIncrease", 100.0), ("campaignDuration", 6.0)]),
            expected_roi: 28.4,
            risk_level: RiskLevel::High,
            time_to_breakeven: 5.0,
            revenue_impact: 650_000.0,
            confidence_level: 58.0,
        },
        ForecastScenario {
            id: "forecast-4".to_string(),
            name: "New Product Line".to_string(),
            forecast_type: ForecastType::ProductLaunch,
            parameters: params(&[("developmentCost", 450_000.0), ("expectedRevenue", 1_500_000.0)]),
            expected_roi: 42.8,
            risk_level: RiskLevel::High,
            time_to_breakeven: 12.0,
            revenue_impact: 1_500_000.0,
            confidence_level: 52.0,
        },
    ]
}
