//! Filter-driven analyzer.
//!
//! The structured counterpart of the free-text builder: the caller picks
//! filters instead of typing a question. Every combination is valid,
//! including no filters at all.

use crate::{
    analysis::{uniform_series, AnalysisResult, Metric},
    catalog::{AgeGroup, Category, Device, Region, TimeRange},
    format::{format_count_in, format_currency},
    rng::RandomSource,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisFilter {
    #[serde(default)]
    pub category:   Option<Category>,
    #[serde(default)]
    pub device:     Option<Device>,
    #[serde(default)]
    pub age_group:  Option<AgeGroup>,
    #[serde(default)]
    pub region:     Option<Region>,
    #[serde(default)]
    pub time_range: TimeRange,
    #[serde(default)]
    pub fraud_only: bool,
}

impl AnalysisFilter {
    /// The `AND ...` clauses this filter adds to the WHERE block.
    fn where_clauses(&self) -> Vec<String> {
        let mut clauses = Vec::new();
        if let Some(device) = self.device {
            clauses.push(format!("AND device = '{device}'"));
        }
        if let Some(category) = self.category {
            clauses.push(format!("AND category = '{category}'"));
        }
        if let Some(age) = self.age_group {
            clauses.push(format!("AND age_group = '{age}'"));
        }
        if let Some(region) = self.region {
            clauses.push(format!("AND region = '{region}'"));
        }
        if self.fraud_only {
            clauses.push("AND is_fraud = TRUE".to_string());
        }
        clauses
    }

    fn sql(&self) -> String {
        let mut sql = String::from(concat!(
            "SELECT device, COUNT(*) AS txn_count,\n",
            "  SUM(amount) AS revenue\n",
            "FROM transactions\n",
        ));
        sql.push_str(&format!(
            "WHERE created_at >= NOW() - INTERVAL '{} days'\n",
            self.time_range.days()
        ));
        for clause in self.where_clauses() {
            sql.push_str("  ");
            sql.push_str(&clause);
            sql.push('\n');
        }
        sql.push_str("GROUP BY device\nORDER BY txn_count DESC;");
        sql
    }
}

/// Run the analyzer over a filter set.
pub fn generate_filtered_analysis<R: RandomSource>(
    filter: &AnalysisFilter,
    rng: &mut R,
) -> AnalysisResult {
    let total_tx = rng.between(8_000, 45_000);
    let total_rev = rng.between(120_000, 450_000);
    let chart_data =
        uniform_series(Device::ALL.into_iter().map(|d| d.label()), 2_000, 15_000, rng);

    let window = filter.time_range.label().to_lowercase();
    let insight = if filter.fraud_only {
        let device_part = match filter.device {
            Some(device) => {
                format!("{device} shows a {:.1}% fraud rate.", rng.next_f64() * 3.0 + 1.0)
            }
            None => "Android and Web show slightly higher fraud rates than iOS.".to_string(),
        };
        format!(
            "Fraud transactions account for {:.1}% of total volume in the {window} window. {device_part}",
            rng.next_f64() * 5.0 + 2.0
        )
    } else {
        let device_part = match filter.device {
            Some(device) => format!(
                "{device} users contribute {}% of total transactions.",
                rng.between(15, 40)
            ),
            None => "Mobile platforms dominate with 68% of all transactions.".to_string(),
        };
        format!(
            "Transaction volume is steady across the {window} period. {device_part} Average order value is {}.",
            format_currency(rng.between(350, 1_200) as f64, false)
        )
    };

    log::debug!("analyzer: filter={filter:?} total_tx={total_tx}");

    AnalysisResult {
        branch: None,
        sql: filter.sql(),
        metrics: vec![
            Metric::new("Total Transactions", format_count_in(total_tx)),
            Metric::new("Total Revenue", format_currency(total_rev as f64, false)),
        ],
        insight,
        chart_data,
    }
}
