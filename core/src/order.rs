//! Order generation and the live order feed.

use crate::{
    catalog::{AgeGroup, Category, Device, PaymentMethod, Region},
    clock::Clock,
    config::GeneratorConfig,
    rng::RandomSource,
    types::{OrderId, Rupees, UserId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name:  String,
    pub qty:   u64,
    pub price: Rupees,
}

impl LineItem {
    pub fn subtotal(&self) -> Rupees {
        self.qty * self.price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id:       OrderId,
    pub user_id:        UserId,
    pub device:         Device,
    pub category:       Category,
    /// Always the exact sum of line-item subtotals.
    pub amount:         Rupees,
    pub location:       Region,
    pub timestamp:      DateTime<Utc>,
    pub is_fraud:       bool,
    pub payment_method: PaymentMethod,
    pub age_group:      AgeGroup,
    pub items:          Vec<LineItem>,
}

impl Order {
    pub fn items_total(&self) -> Rupees {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".into();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// `ORD-<base36 epoch millis>-<6 base36 chars>`.
///
/// The random suffix spans 36^6 values so orders minted in the same
/// millisecond still collide with negligible probability.
pub fn generate_order_id<R: RandomSource>(now: DateTime<Utc>, rng: &mut R) -> OrderId {
    let millis = now.timestamp_millis().max(0) as u64;
    let suffix: String = (0..6)
        .map(|_| BASE36[rng.between(0, 35) as usize] as char)
        .collect();
    format!("ORD-{}-{suffix}", to_base36(millis))
}

/// `USR-<5 digits>`.
pub fn generate_user_id<R: RandomSource>(rng: &mut R) -> UserId {
    format!("USR-{}", rng.between(10_000, 99_999))
}

/// Synthesize one order stamped with the clock's current instant.
pub fn generate_order<R: RandomSource, C: Clock>(
    rng: &mut R,
    clock: &C,
    config: &GeneratorConfig,
) -> Order {
    let category = *rng.pick(&Category::ALL);
    let is_fraud = rng.chance(config.fraud_probability);

    let item_count = rng.between(config.items_per_order.min, config.items_per_order.max);
    let items: Vec<LineItem> = (0..item_count)
        .map(|_| LineItem {
            name:  rng.pick(category.item_names()).to_string(),
            qty:   rng.between(config.item_quantity.min, config.item_quantity.max),
            price: rng.between(config.unit_price.min, config.unit_price.max),
        })
        .collect();
    let amount = items.iter().map(LineItem::subtotal).sum();

    let now = clock.now();
    Order {
        order_id: generate_order_id(now, rng),
        user_id: generate_user_id(rng),
        device: *rng.pick(&Device::ALL),
        category,
        amount,
        location: *rng.pick(&Region::ALL),
        timestamp: now,
        is_fraud,
        payment_method: *rng.pick(&PaymentMethod::ALL),
        age_group: *rng.pick(&AgeGroup::ALL),
        items,
    }
}

/// A batch of independent orders, as served to the live-orders view.
pub fn generate_orders<R: RandomSource, C: Clock>(
    count: usize,
    rng: &mut R,
    clock: &C,
    config: &GeneratorConfig,
) -> Vec<Order> {
    (0..count).map(|_| generate_order(rng, clock, config)).collect()
}

/// Bounded newest-first order buffer backing the live feed.
#[derive(Debug, Clone)]
pub struct OrderFeed {
    orders:   VecDeque<Order>,
    capacity: usize,
}

impl OrderFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            orders: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// A feed pre-filled with `config.live_feed_seed` orders.
    pub fn seeded<R: RandomSource, C: Clock>(
        rng: &mut R,
        clock: &C,
        config: &GeneratorConfig,
    ) -> Self {
        let mut feed = Self::new(config.live_feed_capacity);
        for order in generate_orders(config.live_feed_seed, rng, clock, config) {
            feed.orders.push_back(order);
        }
        feed
    }

    /// Put an order at the front, evicting the oldest past capacity.
    pub fn push(&mut self, order: Order) {
        self.orders.push_front(order);
        self.orders.truncate(self.capacity);
    }

    /// Generate and push one new order.
    pub fn tick<R: RandomSource, C: Clock>(
        &mut self,
        rng: &mut R,
        clock: &C,
        config: &GeneratorConfig,
    ) -> Option<&Order> {
        self.push(generate_order(rng, clock, config));
        log::debug!("feed: {} orders buffered", self.orders.len());
        self.orders.front()
    }

    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
