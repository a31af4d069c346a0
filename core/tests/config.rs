//! Generator configuration loading and validation.

use insightdesk_core::{
    config::{Bounds, GeneratorConfig, MAX_LOOKBACK_DAYS},
    error::MockError,
};
use std::path::PathBuf;

fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("insightdesk-{}-{name}.json", std::process::id()));
    std::fs::write(&path, content).expect("write temp config");
    path
}

#[test]
fn defaults_match_the_documented_bounds() {
    let config = GeneratorConfig::default();
    assert_eq!(config.fraud_probability, 0.08);
    assert_eq!(config.items_per_order, Bounds::new(1, 4));
    assert_eq!(config.item_quantity, Bounds::new(1, 3));
    assert_eq!(config.unit_price, Bounds::new(25, 1_000));
    assert_eq!(config.history_orders, Bounds::new(12, 50));
    assert_eq!(config.history_lookback_days, 365);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_file_keeps_defaults() {
    let path = write_temp("partial", r#"{ "fraud_probability": 0.2, "live_orders_batch": 3 }"#);
    let config = GeneratorConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.fraud_probability, 0.2);
    assert_eq!(config.live_orders_batch, 3);
    assert_eq!(config.unit_price, Bounds::new(25, 1_000));
}

#[test]
fn inverted_range_is_rejected() {
    let path = write_temp("inverted", r#"{ "unit_price": { "min": 500, "max": 10 } }"#);
    let err = GeneratorConfig::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    match err {
        MockError::InvalidConfig { field, .. } => assert_eq!(field, "unit_price"),
        other => panic!("Expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn probability_outside_unit_interval_is_rejected() {
    let config = GeneratorConfig { fraud_probability: 1.5, ..GeneratorConfig::default() };
    assert!(matches!(
        config.validate(),
        Err(MockError::InvalidConfig { field: "fraud_probability", .. })
    ));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let path = write_temp("malformed", "{ not json");
    let err = GeneratorConfig::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, MockError::Serialization(_)), "Got {err:?}");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GeneratorConfig::load("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, MockError::Io(_)), "Got {err:?}");
}

#[test]
fn lookback_beyond_the_limit_is_rejected() {
    let path = write_temp("lookback", r#"{ "history_lookback_days": 100000000 }"#);
    let err = GeneratorConfig::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(
        matches!(err, MockError::InvalidConfig { field: "history_lookback_days", .. }),
        "Got {err:?}"
    );

    let at_limit = GeneratorConfig {
        history_lookback_days: MAX_LOOKBACK_DAYS,
        ..GeneratorConfig::default()
    };
    assert!(at_limit.validate().is_ok());
    let past_limit = GeneratorConfig {
        history_lookback_days: u64::MAX,
        ..GeneratorConfig::default()
    };
    assert!(past_limit.validate().is_err());
}

#[test]
fn unit_price_that_overflows_an_order_is_rejected() {
    let path = write_temp("price", r#"{ "unit_price": { "min": 1, "max": 18446744073709551615 } }"#);
    let err = GeneratorConfig::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(
        matches!(err, MockError::InvalidConfig { field: "unit_price", .. }),
        "Got {err:?}"
    );
}

#[test]
fn spend_overflow_counts_every_multiplier() {
    // Each factor fits alone; only the history-wide product overflows.
    let config = GeneratorConfig {
        unit_price: Bounds::new(1, u64::MAX / 12),
        item_quantity: Bounds::new(1, 3),
        items_per_order: Bounds::new(1, 4),
        history_orders: Bounds::new(1, 2),
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(MockError::InvalidConfig { field: "unit_price", .. })
    ));

    let fits = GeneratorConfig { history_orders: Bounds::new(1, 1), ..config };
    assert!(fits.validate().is_ok());
}
