//! Analysis result builder.
//!
//! A question is classified, exactly one branch is selected in
//! `Topic::PRIORITY` order (fallback when nothing matched), and the
//! branch fabricates its chart series and metric cards from bounded
//! uniform draws. SQL text and insight prose are fixed per branch;
//! only the numbers vary between calls.

use crate::{
    catalog::{AgeGroup, Category, Device, Region},
    classify::{classify, Topic, TopicFlags},
    format::{format_count, format_currency},
    rng::RandomSource,
    types::ChartPoint,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into(), change: None }
    }

    pub fn with_change(mut self, change: impl Into<String>) -> Self {
        self.change = Some(change.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The keyword branch that produced this result. Filter-driven
    /// results carry their own SQL and insight, and leave this empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch:     Option<Branch>,
    pub sql:        String,
    pub metrics:    Vec<Metric>,
    pub insight:    String,
    pub chart_data: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Fraud,
    Device,
    Category,
    Time,
    Geo,
    Revenue,
    Age,
    Fallback,
}

// ── Per-branch series: (label, min, max), fixed order ──────────────

const FRAUD_BY_DEVICE: [(&str, u64, u64); 4] = [
    ("Android", 4_000, 7_000),
    ("iOS",     2_000, 4_000),
    ("Web",       800, 2_000),
    ("Desktop",   300, 1_000),
];

const PEAK_HOURS: [(&str, u64, u64); 8] = [
    ("6AM",   8_000, 15_000),
    ("9AM",  25_000, 40_000),
    ("12PM", 50_000, 70_000),
    ("3PM",  40_000, 55_000),
    ("6PM",  60_000, 80_000),
    ("7PM",  75_000, 95_000),
    ("9PM",  45_000, 65_000),
    ("12AM", 15_000, 30_000),
];

/// Regions charted by the geo branch.
pub const GEO_BRANCH_REGIONS: usize = 6;

/// Months charted by the revenue branch.
pub const REVENUE_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Categories charted by the fallback branch.
pub const FALLBACK_CATEGORIES: usize = 5;

impl Branch {
    pub const ALL: [Branch; 8] = [
        Self::Fraud,
        Self::Device,
        Self::Category,
        Self::Time,
        Self::Geo,
        Self::Revenue,
        Self::Age,
        Self::Fallback,
    ];

    /// First raised flag wins; nothing raised means fallback.
    pub fn select(flags: &TopicFlags) -> Self {
        match flags.primary() {
            Some(Topic::Fraud)    => Self::Fraud,
            Some(Topic::Device)   => Self::Device,
            Some(Topic::Category) => Self::Category,
            Some(Topic::Time)     => Self::Time,
            Some(Topic::Geo)      => Self::Geo,
            Some(Topic::Revenue)  => Self::Revenue,
            Some(Topic::Age)      => Self::Age,
            None                  => Self::Fallback,
        }
    }

    /// Number of points in this branch's chart series.
    pub fn series_len(&self) -> usize {
        match self {
            Self::Fraud    => FRAUD_BY_DEVICE.len(),
            Self::Device   => Device::ALL.len(),
            Self::Category => Category::ALL.len(),
            Self::Time     => PEAK_HOURS.len(),
            Self::Geo      => GEO_BRANCH_REGIONS,
            Self::Revenue  => REVENUE_MONTHS.len(),
            Self::Age      => AgeGroup::ALL.len(),
            Self::Fallback => FALLBACK_CATEGORIES,
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            Self::Fraud => concat!(
                "SELECT device_os, COUNT(*) as fraud_count,\n",
                "  ROUND(COUNT(*)*100.0/SUM(COUNT(*)) OVER(), 2) as pct\n",
                "FROM transactions\n",
                "WHERE is_fraud = true\n",
                "GROUP BY device_os\n",
                "ORDER BY fraud_count DESC;",
            ),
            Self::Device => concat!(
                "SELECT device_type, COUNT(*) as tx_count,\n",
                "  SUM(amount) as total_revenue,\n",
                "  AVG(amount) as avg_order\n",
                "FROM transactions\n",
                "GROUP BY device_type\n",
                "ORDER BY total_revenue DESC;",
            ),
            Self::Category => concat!(
                "SELECT category, COUNT(*) as order_count,\n",
                "  SUM(amount) as revenue,\n",
                "  AVG(amount) as avg_value\n",
                "FROM transactions\n",
                "GROUP BY category\n",
                "ORDER BY revenue DESC;",
            ),
            Self::Time => concat!(
                "SELECT EXTRACT(HOUR FROM created_at) as hour,\n",
                "  COUNT(*) as tx_count,\n",
                "  SUM(amount) as total_amount\n",
                "FROM transactions\n",
                "GROUP BY hour\n",
                "ORDER BY tx_count DESC\n",
                "LIMIT 8;",
            ),
            Self::Geo => concat!(
                "SELECT region, COUNT(*) as tx_count,\n",
                "  SUM(amount) as revenue,\n",
                "  AVG(CASE WHEN is_fraud THEN 1 ELSE 0 END)*100 as fraud_pct\n",
                "FROM transactions\n",
                "GROUP BY region\n",
                "ORDER BY revenue DESC\n",
                "LIMIT 10;",
            ),
            Self::Revenue => concat!(
                "SELECT DATE_TRUNC('month', created_at) as month,\n",
                "  SUM(amount) as revenue,\n",
                "  COUNT(DISTINCT user_id) as active_users,\n",
                "  SUM(amount)/COUNT(DISTINCT user_id) as arpu\n",
                "FROM transactions\n",
                "GROUP BY month\n",
                "ORDER BY month;",
            ),
            Self::Age => concat!(
                "SELECT age_group, COUNT(*) as tx_count,\n",
                "  SUM(amount) as total_spend,\n",
                "  AVG(amount) as avg_order\n",
                "FROM transactions\n",
                "GROUP BY age_group\n",
                "ORDER BY total_spend DESC;",
            ),
            Self::Fallback => concat!(
                "SELECT category, COUNT(*) as count,\n",
                "  SUM(amount) as total\n",
                "FROM transactions\n",
                "GROUP BY category\n",
                "ORDER BY total DESC\n",
                "LIMIT 5;",
            ),
        }
    }

    pub fn insight(&self) -> &'static str {
        match self {
            Self::Fraud => "Fraud patterns show Android devices accounting for ~60% of flagged transactions. Late-night hours (12am-3am) show 3x higher fraud rates. Maharashtra and Delhi are the most impacted regions. Implementing real-time ML scoring could reduce fraud by an estimated 40%.",
            Self::Device => "Mobile devices (Android + iOS) dominate with 78% of all transactions. iOS users show 22% higher average order values. Desktop has the highest conversion rate at 4.2%. Web traffic is primarily browse-only with lower checkout completion.",
            Self::Category => "Food and Electronics lead category performance, contributing 52% of total revenue. Fashion shows the highest growth rate at 18% MoM. Grocery has strong repeat purchase patterns with 3.2x monthly frequency. Travel shows seasonal spikes during holiday periods.",
            Self::Time => "Peak transaction volume occurs at 7PM (19:00), correlating with post-work shopping behavior. A secondary peak at 12PM aligns with lunch-hour purchases. Weekend volumes are 28% higher than weekdays. Infrastructure should be scaled for these windows.",
            Self::Geo => "Maharashtra leads with 22% of national transaction volume, followed by Delhi at 18%. Karnataka shows the highest growth trajectory at 24% QoQ. Southern states show higher average order values. Tier-2 cities are emerging as key growth markets.",
            Self::Revenue => "Revenue shows consistent 12% MoM growth with Q4 projections exceeding ₹6Cr. ARPU has increased by 18% over the last quarter. Top 10% of customers contribute 42% of total revenue. Reducing fraud losses could add ₹50L to net revenue annually.",
            Self::Age => "The 26-35 age group dominates spending at 38% of total volume. Users aged 18-25 show the highest growth rate but lower AOV. The 46-55 segment has the best retention metrics. Targeted campaigns for each cohort could increase overall engagement by 25%.",
            Self::Fallback => "Analysis reveals strong growth trends across key metrics. The platform processes over 500K daily transactions with 99.7% uptime. User engagement has increased 28% QoQ. Recommended focus areas include fraud prevention and geographic expansion.",
        }
    }

    fn chart<R: RandomSource>(&self, rng: &mut R) -> Vec<ChartPoint> {
        match self {
            Self::Fraud => ranged_series(&FRAUD_BY_DEVICE, rng),
            Self::Time  => ranged_series(&PEAK_HOURS, rng),
            Self::Device => {
                uniform_series(Device::ALL.into_iter().map(|d| d.label()), 10_000, 80_000, rng)
            }
            Self::Category => {
                uniform_series(Category::ALL.into_iter().map(|c| c.label()), 50_000, 300_000, rng)
            }
            Self::Geo => uniform_series(
                Region::ALL.into_iter().take(GEO_BRANCH_REGIONS).map(|r| r.label()),
                20_000,
                90_000,
                rng,
            ),
            Self::Revenue => uniform_series(REVENUE_MONTHS.into_iter(), 500_000, 2_500_000, rng),
            Self::Age => {
                uniform_series(AgeGroup::ALL.into_iter().map(|a| a.label()), 10_000, 60_000, rng)
            }
            Self::Fallback => uniform_series(
                Category::ALL.into_iter().take(FALLBACK_CATEGORIES).map(|c| c.label()),
                10_000,
                60_000,
                rng,
            ),
        }
    }

    fn metrics<R: RandomSource>(&self, rng: &mut R) -> Vec<Metric> {
        match self {
            Self::Fraud => vec![
                Metric::new("Total Fraud", format_count(rng.between(10_000, 20_000)))
                    .with_change("+8.2%"),
                Metric::new("Fraud Rate", format!("{:.1}%", rng.next_f64() * 5.0 + 3.0)),
                Metric::new("Avg Fraud Amt", format_currency(rng.between(75, 200) as f64, false)),
                Metric::new("Detection Rate", format!("{}%", rng.between(85, 97)))
                    .with_change("+3.1%"),
            ],
            Self::Device => vec![
                Metric::new("Top Device", "Android").with_change("45% share"),
                Metric::new("Highest AOV", "iOS").with_change("₹2,850"),
                Metric::new("Best Convert", "Desktop").with_change("4.2%"),
                Metric::new("Total Devices", "4 Types"),
            ],
            Self::Category => vec![
                Metric::new("Top Category", "Food").with_change("+15%"),
                Metric::new("Total Revenue", format!("₹{:.1}Cr", rng.next_f64() * 2.5 + 4.0)),
                Metric::new("Avg Basket", format_currency(rng.between(500, 3_000) as f64, false)),
                Metric::new("Growth Rate", "18% MoM").with_change("+4.2%"),
            ],
            Self::Time => vec![
                Metric::new("Peak Hour", "7 PM").with_change("Highest"),
                Metric::new("Peak Volume", format_count(rng.between(70_000, 95_000))),
                Metric::new("Daily Total", format_count(rng.between(400_000, 600_000))),
                Metric::new("Avg/Min", format_count(rng.between(800, 1_500))),
            ],
            Self::Geo => vec![
                Metric::new("Top Region", "Maharashtra").with_change("22% share"),
                Metric::new("Total Regions", "10 States"),
                Metric::new("Fastest Growth", "Karnataka").with_change("+24% QoQ"),
                Metric::new("Avg Revenue", format!("₹{:.1}Cr", rng.next_f64() + 0.5)),
            ],
            Self::Revenue => vec![
                Metric::new("Q4 Revenue", format!("₹{:.1}Cr", rng.next_f64() * 2.5 + 5.0))
                    .with_change("+12%"),
                Metric::new("ARPU", format_currency(rng.between(1_500, 5_000) as f64, false))
                    .with_change("+18%"),
                Metric::new("Net Margin", format!("{}%", rng.between(15, 35))),
                Metric::new("Growth", "12% MoM").with_change("Steady"),
            ],
            Self::Age => vec![
                Metric::new("Top Segment", "26-35").with_change("38% spend"),
                Metric::new("Fastest Growing", "18-25").with_change("+32%"),
                Metric::new("Best Retention", "46-55").with_change("72%"),
                Metric::new("Avg AOV", format_currency(rng.between(500, 2_000) as f64, false)),
            ],
            Self::Fallback => vec![
                Metric::new("Transactions", format!("{}K/day", rng.between(400, 600))),
                Metric::new("Uptime", "99.7%").with_change("Stable"),
                Metric::new("Users", format!("{}K", rng.between(80, 200))).with_change("+28%"),
                Metric::new("Avg Value", format_currency(rng.between(500, 2_500) as f64, false)),
            ],
        }
    }

    /// Fabricate the full bundle for this branch.
    pub fn build<R: RandomSource>(&self, rng: &mut R) -> AnalysisResult {
        let chart_data = self.chart(rng);
        let metrics = self.metrics(rng);
        AnalysisResult {
            branch: Some(*self),
            sql: self.sql().to_string(),
            metrics,
            insight: self.insight().to_string(),
            chart_data,
        }
    }
}

/// One draw per entry, each within its own bounds.
fn ranged_series<R: RandomSource>(bounds: &[(&str, u64, u64)], rng: &mut R) -> Vec<ChartPoint> {
    bounds
        .iter()
        .map(|(name, min, max)| ChartPoint::new(*name, rng.between(*min, *max) as f64))
        .collect()
}

/// One draw per label, all within `[min, max]`.
pub(crate) fn uniform_series<'a, R: RandomSource>(
    labels: impl Iterator<Item = &'a str>,
    min: u64,
    max: u64,
    rng: &mut R,
) -> Vec<ChartPoint> {
    labels
        .map(|name| ChartPoint::new(name, rng.between(min, max) as f64))
        .collect()
}

/// Answer a free-text question. Total: any input, including the empty
/// string, yields a complete result.
pub fn generate_analysis_result<R: RandomSource>(question: &str, rng: &mut R) -> AnalysisResult {
    let flags = classify(question);
    let branch = Branch::select(&flags);
    log::debug!("analysis: branch={branch:?} flags={:?}", flags.topics());
    branch.build(rng)
}
