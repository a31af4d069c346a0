//! Keyword intent classification.
//!
//! A question is lower-cased once and tested for substring membership
//! against each topic's keyword group. Flags are independent: one
//! question may raise several. Where a single topic must win, the
//! first raised flag in `Topic::PRIORITY` order is taken.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Fraud,
    Device,
    Category,
    Time,
    Geo,
    Revenue,
    Age,
}

impl Topic {
    /// Evaluation and branch-selection order. Never reorder.
    pub const PRIORITY: [Topic; 7] = [
        Self::Fraud,
        Self::Device,
        Self::Category,
        Self::Time,
        Self::Geo,
        Self::Revenue,
        Self::Age,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        KEYWORDS
            .iter()
            .find(|(topic, _)| topic == self)
            .map(|(_, words)| *words)
            .unwrap_or(&[])
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fraud    => "fraud",
            Self::Device   => "device",
            Self::Category => "category",
            Self::Time     => "time",
            Self::Geo      => "geo",
            Self::Revenue  => "revenue",
            Self::Age      => "age",
        }
    }
}

/// Keyword groups in priority order. All entries are lower-case.
pub const KEYWORDS: [(Topic, &[&str]); 7] = [
    (Topic::Fraud,    &["fraud"]),
    (Topic::Device,   &["device", "android", "ios"]),
    (Topic::Category, &["category", "food", "electronics", "fashion"]),
    (Topic::Time,     &["hour", "time", "day", "month", "week", "trend", "seasonal", "peak"]),
    (Topic::Geo,      &["region", "city", "state", "geographic", "metro"]),
    (Topic::Revenue,  &["revenue", "arpu", "margin", "spend"]),
    (Topic::Age,      &["age", "demographic"]),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicFlags {
    pub fraud:    bool,
    pub device:   bool,
    pub category: bool,
    pub time:     bool,
    pub geo:      bool,
    pub revenue:  bool,
    pub age:      bool,
}

impl TopicFlags {
    pub fn is_set(&self, topic: Topic) -> bool {
        match topic {
            Topic::Fraud    => self.fraud,
            Topic::Device   => self.device,
            Topic::Category => self.category,
            Topic::Time     => self.time,
            Topic::Geo      => self.geo,
            Topic::Revenue  => self.revenue,
            Topic::Age      => self.age,
        }
    }

    fn set(&mut self, topic: Topic) {
        match topic {
            Topic::Fraud    => self.fraud = true,
            Topic::Device   => self.device = true,
            Topic::Category => self.category = true,
            Topic::Time     => self.time = true,
            Topic::Geo      => self.geo = true,
            Topic::Revenue  => self.revenue = true,
            Topic::Age      => self.age = true,
        }
    }

    /// First raised flag in priority order, or `None` when nothing matched.
    pub fn primary(&self) -> Option<Topic> {
        Topic::PRIORITY.into_iter().find(|t| self.is_set(*t))
    }

    /// Every raised flag, in priority order.
    pub fn topics(&self) -> Vec<Topic> {
        Topic::PRIORITY.into_iter().filter(|t| self.is_set(*t)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.primary().is_none()
    }
}

/// Classify a free-text question. Pure and total.
pub fn classify(text: &str) -> TopicFlags {
    let lower = text.to_lowercase();
    let mut flags = TopicFlags::default();
    for (topic, words) in KEYWORDS {
        if words.iter().any(|w| lower.contains(w)) {
            flags.set(topic);
        }
    }
    flags
}
