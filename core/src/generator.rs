//! The generator facade.
//!
//! Owns one RNG stream per concern (all derived from one master seed),
//! the clock, the config, and the live order feed. Callers that want
//! to inject their own `RandomSource` use the free functions in each
//! module directly; this type wires the common case.

use crate::{
    analysis::{generate_analysis_result, AnalysisResult},
    analyzer::{generate_filtered_analysis, AnalysisFilter},
    classify::{classify, TopicFlags},
    clock::{Clock, SystemClock},
    config::GeneratorConfig,
    dashboard::{
        generate_category_snapshot, generate_device_snapshot, generate_fraud_snapshot,
        generate_overview, generate_time_trends, CategorySnapshot, DeviceSnapshot, FraudSnapshot,
        OverviewSnapshot, TimeTrendsSnapshot,
    },
    geo::{generate_geo_data, sort_geo, GeoPoint, GeoView},
    history::{generate_user_history, UserHistory},
    order::{generate_order, generate_orders, Order, OrderFeed},
    rng::{RngBank, SeededRng, StreamSlot},
};

pub struct MockGenerator<C: Clock = SystemClock> {
    pub config:    GeneratorConfig,
    clock:         C,
    bank:          RngBank,
    analysis_rng:  SeededRng,
    orders_rng:    SeededRng,
    history_rng:   SeededRng,
    geo_rng:       SeededRng,
    dashboard_rng: SeededRng,
    feed:          Option<OrderFeed>,
}

impl MockGenerator<SystemClock> {
    /// Wall-clock generator with a fixed master seed.
    pub fn seeded(seed: u64, config: GeneratorConfig) -> Self {
        Self::new(seed, config, SystemClock)
    }

    /// Wall-clock generator with a random master seed. The seed is
    /// logged so a run can be replayed with `seeded`.
    pub fn from_entropy(config: GeneratorConfig) -> Self {
        let seed: u64 = rand::random();
        log::info!("generator: master seed {seed}");
        Self::seeded(seed, config)
    }
}

impl<C: Clock> MockGenerator<C> {
    pub fn new(seed: u64, config: GeneratorConfig, clock: C) -> Self {
        let bank = RngBank::new(seed);
        Self {
            config,
            clock,
            analysis_rng:  bank.stream(StreamSlot::Analysis),
            orders_rng:    bank.stream(StreamSlot::Orders),
            history_rng:   bank.stream(StreamSlot::History),
            geo_rng:       bank.stream(StreamSlot::Geo),
            dashboard_rng: bank.stream(StreamSlot::Dashboard),
            bank,
            feed: None,
        }
    }

    pub fn master_seed(&self) -> u64 {
        self.bank.master_seed()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ── Analysis ───────────────────────────────────────────────────

    pub fn classify(&self, question: &str) -> TopicFlags {
        classify(question)
    }

    pub fn analyze(&mut self, question: &str) -> AnalysisResult {
        generate_analysis_result(question, &mut self.analysis_rng)
    }

    pub fn analyze_filters(&mut self, filter: &AnalysisFilter) -> AnalysisResult {
        generate_filtered_analysis(filter, &mut self.analysis_rng)
    }

    // ── Orders ─────────────────────────────────────────────────────

    pub fn order(&mut self) -> Order {
        generate_order(&mut self.orders_rng, &self.clock, &self.config)
    }

    /// One batch for the live-orders endpoint.
    pub fn live_orders(&mut self) -> Vec<Order> {
        let count = self.config.live_orders_batch;
        generate_orders(count, &mut self.orders_rng, &self.clock, &self.config)
    }

    /// The live feed, seeded on first access.
    pub fn feed(&mut self) -> &OrderFeed {
        self.ensure_feed()
    }

    /// Push one new order onto the live feed.
    pub fn advance_feed(&mut self) -> &OrderFeed {
        self.ensure_feed();
        if let Some(feed) = self.feed.as_mut() {
            feed.tick(&mut self.orders_rng, &self.clock, &self.config);
        }
        self.ensure_feed()
    }

    fn ensure_feed(&mut self) -> &OrderFeed {
        let (rng, clock, config) = (&mut self.orders_rng, &self.clock, &self.config);
        self.feed
            .get_or_insert_with(|| OrderFeed::seeded(rng, clock, config))
    }

    pub fn user_history(&mut self, user_id: &str) -> UserHistory {
        generate_user_history(user_id, &mut self.history_rng, &self.clock, &self.config)
    }

    // ── Map and dashboard ──────────────────────────────────────────

    pub fn geo_data(&mut self, view: Option<GeoView>) -> Vec<GeoPoint> {
        let mut points = generate_geo_data(&mut self.geo_rng);
        if let Some(view) = view {
            sort_geo(&mut points, view);
        }
        points
    }

    pub fn overview(&mut self) -> OverviewSnapshot {
        generate_overview(&mut self.dashboard_rng)
    }

    pub fn fraud_dashboard(&mut self) -> FraudSnapshot {
        generate_fraud_snapshot(&mut self.dashboard_rng)
    }

    pub fn time_trends(&mut self) -> TimeTrendsSnapshot {
        generate_time_trends(&mut self.dashboard_rng)
    }

    pub fn device_dashboard(&mut self) -> DeviceSnapshot {
        generate_device_snapshot(&mut self.dashboard_rng)
    }

    pub fn category_dashboard(&mut self) -> CategorySnapshot {
        generate_category_snapshot(&mut self.dashboard_rng)
    }
}
