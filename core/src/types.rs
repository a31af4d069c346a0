//! Shared primitive types used across every generator.

/// A whole-rupee amount. Every synthetic amount is integral.
pub type Rupees = u64;

/// Order identifier, `ORD-<base36 millis>-<6 base36 chars>`.
pub type OrderId = String;

/// User identifier, `USR-<5 digits>`.
pub type UserId = String;

/// One point of a chart series: a label from a fixed label set and its value.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartPoint {
    pub name:  String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value }
    }
}
