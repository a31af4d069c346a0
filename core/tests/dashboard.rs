//! Dashboard panel snapshots.

use insightdesk_core::{
    dashboard::{
        generate_category_snapshot, generate_device_snapshot, generate_fraud_snapshot,
        generate_overview, generate_time_trends,
    },
    rng::SeededRng,
};

#[test]
fn overview_series_follow_label_sets() {
    let mut rng = SeededRng::new(1);
    let snap = generate_overview(&mut rng);
    assert_eq!(snap.categories.len(), 8);
    assert_eq!(snap.weekdays.len(), 7);
    assert_eq!(snap.devices.len(), 4);
    assert_eq!(snap.regions.len(), 6);
    assert_eq!(snap.weekdays[0].name, "Mon");
    assert!((18_000..=45_000).contains(&snap.stats.total_transactions));
    assert!((2.0..=6.0).contains(&snap.stats.fraud_rate));
}

#[test]
fn fraud_snapshot_shapes() {
    let mut rng = SeededRng::new(2);
    let snap = generate_fraud_snapshot(&mut rng);
    assert_eq!(snap.by_device.len(), 4);
    assert_eq!(snap.by_category.len(), 8);
    assert_eq!(snap.monthly_trend.len(), 8);
    assert_eq!(snap.monthly_trend.last().unwrap().name, "Aug");
    for point in &snap.by_region {
        assert_eq!(point.value, (point.value * 10.0).round() / 10.0, "Rate not one decimal");
        assert!((1.0..=9.0).contains(&point.value));
    }
    assert!((85..=97).contains(&snap.stats.detected));
}

#[test]
fn time_trends_cover_the_calendar() {
    let mut rng = SeededRng::new(3);
    for _ in 0..50 {
        let snap = generate_time_trends(&mut rng);
        assert_eq!(snap.hourly.len(), 24);
        assert_eq!(snap.daily.len(), 7);
        assert_eq!(snap.monthly.len(), 12);
        assert_eq!(snap.weekday_vs_weekend.len(), 24);
        assert_eq!(snap.hourly[0].name, "00:00");
        assert_eq!(snap.hourly[23].name, "23:00");
        // Night hours never reach the evening ceiling.
        assert!(snap.hourly[2].value <= 15_000.0);
        assert!(snap.hourly[2].value >= 1_000.0);
        assert!(snap.hourly[18].value >= 5_000.0);
    }
}

#[test]
fn category_growth_may_be_negative() {
    let mut rng = SeededRng::new(4);
    let mut saw_negative = false;
    for _ in 0..50 {
        let snap = generate_category_snapshot(&mut rng);
        assert_eq!(snap.growth.len(), 8);
        for point in &snap.growth {
            assert!((-5.0..=30.0).contains(&point.value));
            saw_negative |= point.value < 0.0;
        }
    }
    assert!(saw_negative, "Growth never dipped below zero");
}

#[test]
fn device_snapshot_bounds() {
    let mut rng = SeededRng::new(5);
    let snap = generate_device_snapshot(&mut rng);
    assert_eq!(snap.transactions.len(), 4);
    assert!(snap.aov.iter().all(|p| (400.0..=1_800.0).contains(&p.value)));
}
