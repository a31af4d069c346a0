use crate::error::{MockError, MockResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Longest history window accepted, in days.
pub const MAX_LOOKBACK_DAYS: u64 = 36_500;

/// An inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: u64,
    pub max: u64,
}

impl Bounds {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Tunable bounds for order and history generation.
///
/// Label sets are not configurable; see `catalog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Probability an order is flagged fraudulent.
    pub fraud_probability: f64,
    /// Line items per order.
    pub items_per_order: Bounds,
    /// Quantity per line item.
    pub item_quantity: Bounds,
    /// Unit price per line item, whole rupees.
    pub unit_price: Bounds,
    /// Orders generated for one user history.
    pub history_orders: Bounds,
    /// History timestamps fall within this many days before now.
    pub history_lookback_days: u64,
    /// Orders retained by the live feed.
    pub live_feed_capacity: usize,
    /// Orders the live feed starts with.
    pub live_feed_seed: usize,
    /// Orders returned per live-orders request.
    pub live_orders_batch: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            fraud_probability:     0.08,
            items_per_order:       Bounds::new(1, 4),
            item_quantity:         Bounds::new(1, 3),
            unit_price:            Bounds::new(25, 1_000),
            history_orders:        Bounds::new(12, 50),
            history_lookback_days: 365,
            live_feed_capacity:    50,
            live_feed_seed:        8,
            live_orders_batch:     10,
        }
    }
}

impl GeneratorConfig {
    /// Load from a JSON file. Absent fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> MockResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("config: loaded {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> MockResult<()> {
        if !(0.0..=1.0).contains(&self.fraud_probability) {
            return Err(MockError::InvalidConfig {
                field: "fraud_probability",
                reason: format!("{} is outside [0, 1]", self.fraud_probability),
            });
        }
        let ranges = [
            ("items_per_order", self.items_per_order),
            ("item_quantity", self.item_quantity),
            ("unit_price", self.unit_price),
            ("history_orders", self.history_orders),
        ];
        for (field, bounds) in ranges {
            if bounds.min > bounds.max {
                return Err(MockError::InvalidConfig {
                    field,
                    reason: format!("min {} exceeds max {}", bounds.min, bounds.max),
                });
            }
            if bounds.min == 0 {
                return Err(MockError::InvalidConfig {
                    field,
                    reason: "min must be at least 1".into(),
                });
            }
        }
        if self.history_lookback_days > MAX_LOOKBACK_DAYS {
            return Err(MockError::InvalidConfig {
                field: "history_lookback_days",
                reason: format!(
                    "{} exceeds the {MAX_LOOKBACK_DAYS}-day limit",
                    self.history_lookback_days
                ),
            });
        }
        // A history's total spend must fit in `Rupees`.
        let max_spend = self
            .unit_price
            .max
            .checked_mul(self.item_quantity.max)
            .and_then(|line| line.checked_mul(self.items_per_order.max))
            .and_then(|order| order.checked_mul(self.history_orders.max));
        if max_spend.is_none() {
            return Err(MockError::InvalidConfig {
                field: "unit_price",
                reason: format!(
                    "max {} x {} items x {} lines x {} orders overflows",
                    self.unit_price.max,
                    self.item_quantity.max,
                    self.items_per_order.max,
                    self.history_orders.max
                ),
            });
        }
        if self.live_feed_seed > self.live_feed_capacity {
            return Err(MockError::InvalidConfig {
                field: "live_feed_seed",
                reason: format!(
                    "{} exceeds live_feed_capacity {}",
                    self.live_feed_seed, self.live_feed_capacity
                ),
            });
        }
        Ok(())
    }
}
