//! Per-user order history and its derived aggregates.

use crate::{
    catalog::{Category, Device},
    clock::Clock,
    config::GeneratorConfig,
    order::{generate_order, Order},
    rng::RandomSource,
    types::{ChartPoint, Rupees, UserId},
};
use chrono::{Datelike, Duration};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySpend {
    /// `"Mon 'YY"`, e.g. `"Mar '25"`.
    pub month:  String,
    pub amount: Rupees,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserHistory {
    pub user_id:          UserId,
    pub total_orders:     usize,
    pub total_spend:      Rupees,
    pub avg_order:        Rupees,
    pub top_category:     Option<Category>,
    pub top_device:       Option<Device>,
    pub fraud_count:      usize,
    /// Chronological, oldest month first.
    pub monthly_spending: Vec<MonthlySpend>,
    /// One entry per category in catalog order, zero counts included.
    pub category_dist:    Vec<ChartPoint>,
    /// Newest first.
    pub orders:           Vec<Order>,
}

/// Generate a back-dated order history for `user_id`.
pub fn generate_user_history<R: RandomSource, C: Clock>(
    user_id: &str,
    rng: &mut R,
    clock: &C,
    config: &GeneratorConfig,
) -> UserHistory {
    let count = rng.between(config.history_orders.min, config.history_orders.max) as usize;
    let now = clock.now();

    let mut orders: Vec<Order> = (0..count)
        .map(|_| {
            let mut order = generate_order(rng, clock, config);
            order.user_id = user_id.to_string();
            let days_back = rng.between(0, config.history_lookback_days) as i64;
            order.timestamp = now - Duration::days(days_back);
            order
        })
        .collect();
    // Stable: equal timestamps keep generation order.
    orders.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let history = summarize(user_id, orders);
    log::debug!(
        "history: user={} orders={} spend={} fraud={}",
        history.user_id,
        history.total_orders,
        history.total_spend,
        history.fraud_count
    );
    history
}

/// Derive the aggregate view of an already-sorted order list.
pub fn summarize(user_id: &str, orders: Vec<Order>) -> UserHistory {
    let total_spend: Rupees = orders.iter().map(|o| o.amount).sum();
    let avg_order = if orders.is_empty() {
        0
    } else {
        let n = orders.len() as Rupees;
        (total_spend + n / 2) / n
    };

    let mut category_counts = [0usize; Category::ALL.len()];
    let mut device_counts = [0usize; Device::ALL.len()];
    let mut monthly: BTreeMap<(i32, u32), Rupees> = BTreeMap::new();
    for order in &orders {
        category_counts[order.category.index()] += 1;
        device_counts[order.device.index()] += 1;
        let key = (order.timestamp.year(), order.timestamp.month());
        *monthly.entry(key).or_default() += order.amount;
    }

    let monthly_spending = monthly
        .into_iter()
        .map(|((year, month), amount)| MonthlySpend {
            month: month_label(year, month),
            amount,
        })
        .collect();

    let category_dist = Category::ALL
        .iter()
        .zip(category_counts)
        .map(|(c, n)| ChartPoint::new(c.label(), n as f64))
        .collect();

    UserHistory {
        user_id: user_id.to_string(),
        total_orders: orders.len(),
        total_spend,
        avg_order,
        top_category: mode(&Category::ALL, &category_counts),
        top_device: mode(&Device::ALL, &device_counts),
        fraud_count: orders.iter().filter(|o| o.is_fraud).count(),
        monthly_spending,
        category_dist,
        orders,
    }
}

/// Most frequent member. Ties go to the earlier member of `all`;
/// no occurrences at all yields `None`.
fn mode<T: Copy>(all: &[T], counts: &[usize]) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    for (item, &n) in all.iter().zip(counts) {
        if n == 0 {
            continue;
        }
        match best {
            Some((_, top)) if top >= n => {}
            _ => best = Some((*item, n)),
        }
    }
    best.map(|(item, _)| item)
}

fn month_label(year: i32, month: u32) -> String {
    let name = crate::catalog::MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("???");
    format!("{name} '{:02}", year.rem_euclid(100))
}
