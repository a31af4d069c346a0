//! Dashboard panel snapshots.
//!
//! Each page of the dashboard renders one snapshot. Every series is
//! built over its fixed label set, in that set's order.

use crate::{
    analysis::uniform_series,
    catalog::{hour_labels, Category, Device, Region, MONTHS, WEEKDAYS},
    format::round1,
    rng::RandomSource,
    types::{ChartPoint, Rupees},
};
use serde::{Deserialize, Serialize};

/// Regions shown in dashboard region charts.
pub const DASHBOARD_REGIONS: usize = 6;

/// Months shown in the fraud trend chart.
pub const FRAUD_TREND_MONTHS: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_transactions: u64,
    pub revenue:            Rupees,
    pub fraud_rate:         f64,
    pub peak_hour:          String,
    pub active_users:       u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSnapshot {
    pub stats:      OverviewStats,
    pub categories: Vec<ChartPoint>,
    pub weekdays:   Vec<ChartPoint>,
    pub devices:    Vec<ChartPoint>,
    pub regions:    Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudStats {
    pub total:      u64,
    pub rate:       f64,
    pub avg_amount: Rupees,
    pub detected:   u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudSnapshot {
    pub stats:         FraudStats,
    pub by_device:     Vec<ChartPoint>,
    pub by_category:   Vec<ChartPoint>,
    pub monthly_trend: Vec<ChartPoint>,
    /// Fraud rate percent per region, one decimal.
    pub by_region:     Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyVolume {
    pub name:         String,
    pub transactions: u64,
    pub revenue:      Rupees,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSplit {
    pub name:    String,
    pub weekday: u64,
    pub weekend: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTrendsSnapshot {
    pub hourly:             Vec<ChartPoint>,
    pub daily:              Vec<ChartPoint>,
    pub monthly:            Vec<MonthlyVolume>,
    pub weekday_vs_weekend: Vec<WeekSplit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSnapshot {
    pub transactions: Vec<ChartPoint>,
    pub revenue:      Vec<ChartPoint>,
    pub aov:          Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySnapshot {
    pub revenue: Vec<ChartPoint>,
    pub orders:  Vec<ChartPoint>,
    /// Percent growth, may be negative.
    pub growth:  Vec<ChartPoint>,
    pub aov:     Vec<ChartPoint>,
}

fn device_labels() -> impl Iterator<Item = &'static str> {
    Device::ALL.into_iter().map(|d| d.label())
}

fn category_labels() -> impl Iterator<Item = &'static str> {
    Category::ALL.into_iter().map(|c| c.label())
}

fn dashboard_region_labels() -> impl Iterator<Item = &'static str> {
    Region::ALL.into_iter().take(DASHBOARD_REGIONS).map(|r| r.label())
}

pub fn generate_overview<R: RandomSource>(rng: &mut R) -> OverviewSnapshot {
    let stats = OverviewStats {
        total_transactions: rng.between(18_000, 45_000),
        revenue: rng.between(120_000, 450_000),
        fraud_rate: round1(rng.next_f64() * 4.0 + 2.0),
        peak_hour: "7 PM".into(),
        active_users: rng.between(8_000, 22_000),
    };
    OverviewSnapshot {
        stats,
        categories: uniform_series(category_labels(), 2_000, 12_000, rng),
        weekdays: uniform_series(WEEKDAYS.into_iter(), 8_000, 25_000, rng),
        devices: uniform_series(device_labels(), 3_000, 15_000, rng),
        regions: uniform_series(dashboard_region_labels(), 2_000, 12_000, rng),
    }
}

pub fn generate_fraud_snapshot<R: RandomSource>(rng: &mut R) -> FraudSnapshot {
    let by_device = uniform_series(device_labels(), 200, 3_000, rng);
    let by_category = uniform_series(category_labels(), 100, 1_500, rng);
    let monthly_trend =
        uniform_series(MONTHS.into_iter().take(FRAUD_TREND_MONTHS), 400, 2_000, rng);
    let by_region = dashboard_region_labels()
        .map(|name| ChartPoint::new(name, round1(rng.next_f64() * 8.0 + 1.0)))
        .collect();
    FraudSnapshot {
        stats: FraudStats {
            total: rng.between(3_000, 12_000),
            rate: round1(rng.next_f64() * 4.0 + 2.0),
            avg_amount: rng.between(800, 2_500),
            detected: rng.between(85, 97),
        },
        by_device,
        by_category,
        monthly_trend,
        by_region,
    }
}

/// Hourly bounds: daytime (06–22) floors higher, evening (17–20) peaks higher.
fn hourly_bounds(hour: usize) -> (u64, u64) {
    let min = if (6..=22).contains(&hour) { 5_000 } else { 1_000 };
    let max = if (17..=20).contains(&hour) { 25_000 } else { 15_000 };
    (min, max)
}

pub fn generate_time_trends<R: RandomSource>(rng: &mut R) -> TimeTrendsSnapshot {
    let hourly = hour_labels()
        .into_iter()
        .enumerate()
        .map(|(hour, name)| {
            let (min, max) = hourly_bounds(hour);
            ChartPoint::new(name, rng.between(min, max) as f64)
        })
        .collect();
    let daily = uniform_series(WEEKDAYS.into_iter(), 12_000, 35_000, rng);
    let monthly = MONTHS
        .iter()
        .map(|m| MonthlyVolume {
            name: m.to_string(),
            transactions: rng.between(80_000, 250_000),
            revenue: rng.between(200_000, 450_000),
        })
        .collect();
    let weekday_vs_weekend = (0..24)
        .map(|h| WeekSplit {
            name: format!("{h:02}"),
            weekday: rng.between(1_000, 15_000),
            weekend: rng.between(2_000, 18_000),
        })
        .collect();
    TimeTrendsSnapshot { hourly, daily, monthly, weekday_vs_weekend }
}

pub fn generate_device_snapshot<R: RandomSource>(rng: &mut R) -> DeviceSnapshot {
    DeviceSnapshot {
        transactions: uniform_series(device_labels(), 8_000, 35_000, rng),
        revenue: uniform_series(device_labels(), 80_000, 450_000, rng),
        aov: uniform_series(device_labels(), 400, 1_800, rng),
    }
}

pub fn generate_category_snapshot<R: RandomSource>(rng: &mut R) -> CategorySnapshot {
    let revenue = uniform_series(category_labels(), 80_000, 350_000, rng);
    let orders = uniform_series(category_labels(), 5_000, 40_000, rng);
    let growth = category_labels()
        .map(|name| ChartPoint::new(name, rng.between_i64(-5, 30) as f64))
        .collect();
    let aov = uniform_series(category_labels(), 25, 150, rng);
    CategorySnapshot { revenue, orders, growth, aov }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evening_hours_peak_higher() {
        assert_eq!(hourly_bounds(3), (1_000, 15_000));
        assert_eq!(hourly_bounds(12), (5_000, 15_000));
        assert_eq!(hourly_bounds(19), (5_000, 25_000));
        assert_eq!(hourly_bounds(23), (1_000, 15_000));
    }
}
