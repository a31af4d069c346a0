//! Per-region map data.

use crate::{catalog::Region, format::round1, rng::RandomSource, types::Rupees};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub region:       Region,
    pub lat:          f64,
    pub lng:          f64,
    pub transactions: u64,
    pub revenue:      Rupees,
    /// Percent, one decimal, in [1.0, 13.0].
    pub fraud_rate:   f64,
}

/// Which measure the map ranks regions by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoView {
    #[default]
    Transactions,
    Revenue,
    Fraud,
}

/// One point per region, in catalog order.
pub fn generate_geo_data<R: RandomSource>(rng: &mut R) -> Vec<GeoPoint> {
    Region::ALL
        .iter()
        .map(|&region| {
            let (lat, lng) = region.coordinates();
            GeoPoint {
                region,
                lat,
                lng,
                transactions: rng.between(5_000, 80_000),
                revenue: rng.between(250_000, 4_000_000),
                fraud_rate: round1(rng.next_f64() * 12.0 + 1.0),
            }
        })
        .collect()
}

/// Sort descending by the chosen measure.
pub fn sort_geo(points: &mut [GeoPoint], view: GeoView) {
    match view {
        GeoView::Transactions => points.sort_by(|a, b| b.transactions.cmp(&a.transactions)),
        GeoView::Revenue      => points.sort_by(|a, b| b.revenue.cmp(&a.revenue)),
        GeoView::Fraud        => points.sort_by(|a, b| b.fraud_rate.total_cmp(&a.fraud_rate)),
    }
}
