//! JSON request boundary.

use chrono::{TimeZone, Utc};
use insightdesk_core::{
    api::{Reply, Request, Response, DEFAULT_USER_ID, INVALID_REQUEST},
    clock::FixedClock,
    config::{Bounds, GeneratorConfig, MAX_LOOKBACK_DAYS},
    generator::MockGenerator,
};
use serde_json::Value;

fn generator() -> MockGenerator<FixedClock> {
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap());
    MockGenerator::new(42, GeneratorConfig::default(), clock)
}

fn respond(gen: &mut MockGenerator<FixedClock>, line: &str) -> Response {
    match gen.handle_line(line) {
        Reply::Respond(response) => response,
        Reply::Quit => panic!("Unexpected quit for {line}"),
    }
}

fn data(response: &Response) -> &Value {
    assert!(response.success, "Request failed: {:?}", response.error);
    response.data.as_ref().expect("success carries data")
}

#[test]
fn malformed_input_is_an_invalid_request() {
    let mut gen = generator();
    for line in ["not json", "{}", r#"{"type":"launch_rockets"}"#, r#"{"type":"dashboard"}"#, ""] {
        let response = respond(&mut gen, line);
        assert!(!response.success, "{line:?} should be rejected");
        assert_eq!(response.error.as_deref(), Some(INVALID_REQUEST));
        assert!(response.data.is_none());
    }
}

#[test]
fn invalid_envelope_encodes_compactly() {
    assert_eq!(
        Response::invalid().to_json_line(),
        r#"{"success":false,"error":"Invalid request"}"#
    );
}

#[test]
fn analyze_routes_by_keyword() {
    let mut gen = generator();
    let response = respond(&mut gen, r#"{"type":"analyze","query":"Which device has the highest fraud rate?"}"#);
    let data = data(&response);
    assert_eq!(data["branch"], "fraud");
    assert_eq!(data["chartData"].as_array().unwrap().len(), 4);
    assert!(data["sql"].as_str().unwrap().contains("is_fraud"));
}

#[test]
fn analyze_without_query_falls_back() {
    let mut gen = generator();
    let response = respond(&mut gen, r#"{"type":"analyze"}"#);
    assert_eq!(data(&response)["branch"], "fallback");
}

#[test]
fn analyze_filters_accepts_partial_filters() {
    let mut gen = generator();
    let line = r#"{"type":"analyze_filters","filter":{"device":"iOS","timeRange":"Last 7 Days","fraudOnly":true}}"#;
    let response = respond(&mut gen, line);
    let sql = data(&response)["sql"].as_str().unwrap().to_string();
    assert!(sql.contains("INTERVAL '7 days'"));
    assert!(sql.contains("AND device = 'iOS'"));
    assert!(sql.contains("AND is_fraud = TRUE"));
    assert!(data(&response).get("branch").is_none(), "Filtered results name no keyword branch");

    let bad = respond(&mut gen, r#"{"type":"analyze_filters","filter":{"device":"Blackberry"}}"#);
    assert!(!bad.success);
}

#[test]
fn live_orders_returns_a_batch_of_ten() {
    let mut gen = generator();
    let response = respond(&mut gen, r#"{"type":"live_orders"}"#);
    assert_eq!(data(&response).as_array().unwrap().len(), 10);
}

#[test]
fn feed_tick_grows_the_feed() {
    let mut gen = generator();
    let first = respond(&mut gen, r#"{"type":"feed_tick"}"#);
    assert_eq!(first.total, Some(9), "Seeded with 8, then one tick");
    let second = respond(&mut gen, r#"{"type":"feed_tick"}"#);
    assert_eq!(second.total, Some(10));
}

#[test]
fn user_history_defaults_the_user_id() {
    let mut gen = generator();
    let response = respond(&mut gen, r#"{"type":"user_history"}"#);
    assert_eq!(data(&response)["userId"], DEFAULT_USER_ID);

    let response = respond(&mut gen, r#"{"type":"user_history","user_id":"USR-77777"}"#);
    let data = data(&response);
    assert_eq!(data["userId"], "USR-77777");
    let total = data["totalOrders"].as_u64().unwrap();
    assert!((12..=50).contains(&total));
}

#[test]
fn map_data_can_be_ranked() {
    let mut gen = generator();
    let response = respond(&mut gen, r#"{"type":"map_data","view":"revenue"}"#);
    let points = data(&response).as_array().unwrap().clone();
    assert_eq!(points.len(), 10);
    let revenues: Vec<u64> = points.iter().map(|p| p["revenue"].as_u64().unwrap()).collect();
    assert!(revenues.windows(2).all(|w| w[0] >= w[1]), "Not sorted by revenue: {revenues:?}");
}

#[test]
fn questions_report_totals() {
    let mut gen = generator();
    let all = respond(&mut gen, r#"{"type":"questions"}"#);
    assert_eq!(all.total, Some(123));

    let fraud = respond(&mut gen, r#"{"type":"questions","category":"Fraud Analysis"}"#);
    assert_eq!(fraud.total, Some(22));

    let searched = respond(&mut gen, r#"{"type":"questions","search":"UPI","category":"Demographics"}"#);
    assert_eq!(searched.total, Some(1));
}

#[test]
fn dashboard_panels_respond() {
    let mut gen = generator();
    for panel in ["overview", "fraud", "time_trends", "devices", "categories"] {
        let line = format!(r#"{{"type":"dashboard","panel":"{panel}"}}"#);
        let response = respond(&mut gen, &line);
        assert!(response.success, "Panel {panel} failed");
    }
}

#[test]
fn quit_ends_the_session() {
    let mut gen = generator();
    assert_eq!(gen.handle_line(r#"{"type":"quit"}"#), Reply::Quit);
    assert_eq!(gen.handle(Request::Quit), Reply::Quit);
}

#[test]
fn config_at_its_limits_serves_every_order_request() {
    let config = GeneratorConfig {
        history_lookback_days: MAX_LOOKBACK_DAYS,
        unit_price: Bounds::new(1, u64::MAX / 4_000),
        item_quantity: Bounds::new(1, 3),
        items_per_order: Bounds::new(1, 4),
        history_orders: Bounds::new(12, 50),
        ..GeneratorConfig::default()
    };
    config.validate().expect("limits are inclusive");
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap());
    let mut gen = MockGenerator::new(9, config, clock);

    for line in [
        r#"{"type":"user_history"}"#,
        r#"{"type":"live_orders"}"#,
        r#"{"type":"feed_tick"}"#,
    ] {
        assert!(respond(&mut gen, line).success, "{line} failed");
    }
}
