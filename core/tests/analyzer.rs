//! Filter-driven analyzer.

use insightdesk_core::{
    analyzer::{generate_filtered_analysis, AnalysisFilter},
    catalog::{AgeGroup, Category, Device, Region, TimeRange},
    rng::SeededRng,
};

#[test]
fn empty_filter_is_valid() {
    let mut rng = SeededRng::new(1);
    let result = generate_filtered_analysis(&AnalysisFilter::default(), &mut rng);
    assert_eq!(result.branch, None);
    assert_eq!(result.chart_data.len(), 4);
    assert_eq!(result.metrics.len(), 2);
    assert!(result.sql.contains("INTERVAL '30 days'"), "Default window is 30 days");
    assert!(!result.sql.contains("AND "), "No filters means no AND clauses");
    assert!(result.insight.starts_with("Transaction volume is steady across the last 30 days period."));
    assert!(result.insight.contains("Mobile platforms dominate with 68% of all transactions."));
}

#[test]
fn every_filter_adds_a_clause() {
    let mut rng = SeededRng::new(2);
    let filter = AnalysisFilter {
        category: Some(Category::Travel),
        device: Some(Device::Web),
        age_group: Some(AgeGroup::Over56),
        region: Some(Region::WestBengal),
        time_range: TimeRange::Last90Days,
        fraud_only: true,
    };
    let result = generate_filtered_analysis(&filter, &mut rng);
    for clause in [
        "INTERVAL '90 days'",
        "AND device = 'Web'",
        "AND category = 'Travel'",
        "AND age_group = '56+'",
        "AND region = 'West Bengal'",
        "AND is_fraud = TRUE",
    ] {
        assert!(result.sql.contains(clause), "Missing {clause} in:\n{}", result.sql);
    }
    assert!(result.sql.ends_with("ORDER BY txn_count DESC;"));
    assert_eq!(result.branch, None);
}

#[test]
fn fraud_insight_names_the_device() {
    let mut rng = SeededRng::new(3);
    let filter = AnalysisFilter {
        device: Some(Device::Android),
        time_range: TimeRange::Last7Days,
        fraud_only: true,
        ..AnalysisFilter::default()
    };
    let result = generate_filtered_analysis(&filter, &mut rng);
    assert!(result.insight.contains("in the last 7 days window."));
    assert!(result.insight.contains("Android shows a "));
}

#[test]
fn metric_cards_are_formatted() {
    let mut rng = SeededRng::new(4);
    for _ in 0..100 {
        let result = generate_filtered_analysis(&AnalysisFilter::default(), &mut rng);
        assert_eq!(result.metrics[0].label, "Total Transactions");
        assert!(result.metrics[0].value.contains(','));
        assert!(result.metrics[1].value.starts_with('₹'));
        for point in &result.chart_data {
            assert!((2_000.0..=15_000.0).contains(&point.value));
        }
    }
}
