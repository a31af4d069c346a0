//! Fixed label sets.
//!
//! These are compile-time constants, never configuration. Every chart
//! series built over a label set has one entry per member, in the
//! order of the set's `ALL` array.

use crate::error::{MockError, MockResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn parse_label<T: Copy>(
    kind: &'static str,
    input: &str,
    all: &[T],
    label: impl Fn(&T) -> &'static str,
) -> MockResult<T> {
    let wanted = input.trim();
    all.iter()
        .find(|item| label(*item).eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| MockError::UnknownLabel {
            kind,
            value: input.to_string(),
        })
}

// ── Categories ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Electronics,
    Fashion,
    Travel,
    Grocery,
    Entertainment,
    Health,
    Education,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::Food,
        Self::Electronics,
        Self::Fashion,
        Self::Travel,
        Self::Grocery,
        Self::Entertainment,
        Self::Health,
        Self::Education,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Food          => "Food",
            Self::Electronics   => "Electronics",
            Self::Fashion       => "Fashion",
            Self::Travel        => "Travel",
            Self::Grocery       => "Grocery",
            Self::Entertainment => "Entertainment",
            Self::Health        => "Health",
            Self::Education     => "Education",
        }
    }

    /// Line-item names sold under this category.
    pub fn item_names(&self) -> &'static [&'static str] {
        match self {
            Self::Food          => &["Pizza", "Burger", "Sushi", "Pasta", "Biryani", "Salad"],
            Self::Electronics   => &["Headphones", "Charger", "Case", "Cable", "Mouse", "Keyboard"],
            Self::Fashion       => &["T-Shirt", "Jeans", "Sneakers", "Watch", "Bag", "Sunglasses"],
            Self::Travel        => &["Flight", "Hotel", "Cab", "Bus Ticket", "Train Ticket"],
            Self::Grocery       => &["Rice", "Dal", "Milk", "Bread", "Eggs", "Vegetables"],
            Self::Entertainment => &["Movie Ticket", "Game Pass", "Subscription", "Concert Ticket"],
            Self::Health        => &["Vitamins", "Protein", "Mask", "Sanitizer", "Medicine"],
            Self::Education     => &["Course", "Book", "Subscription", "Stationery"],
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = MockError;

    fn from_str(s: &str) -> MockResult<Self> {
        parse_label("category", s, &Self::ALL, Self::label)
    }
}

// ── Devices ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Device {
    Android,
    #[serde(rename = "iOS")]
    Ios,
    Web,
    Desktop,
}

impl Device {
    pub const ALL: [Device; 4] = [Self::Android, Self::Ios, Self::Web, Self::Desktop];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Android => "Android",
            Self::Ios     => "iOS",
            Self::Web     => "Web",
            Self::Desktop => "Desktop",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Device {
    type Err = MockError;

    fn from_str(s: &str) -> MockResult<Self> {
        parse_label("device", s, &Self::ALL, Self::label)
    }
}

// ── Regions ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Maharashtra,
    Delhi,
    Karnataka,
    #[serde(rename = "Tamil Nadu")]
    TamilNadu,
    Gujarat,
    Rajasthan,
    #[serde(rename = "West Bengal")]
    WestBengal,
    Telangana,
    #[serde(rename = "Uttar Pradesh")]
    UttarPradesh,
    Kerala,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Self::Maharashtra,
        Self::Delhi,
        Self::Karnataka,
        Self::TamilNadu,
        Self::Gujarat,
        Self::Rajasthan,
        Self::WestBengal,
        Self::Telangana,
        Self::UttarPradesh,
        Self::Kerala,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Maharashtra  => "Maharashtra",
            Self::Delhi        => "Delhi",
            Self::Karnataka    => "Karnataka",
            Self::TamilNadu    => "Tamil Nadu",
            Self::Gujarat      => "Gujarat",
            Self::Rajasthan    => "Rajasthan",
            Self::WestBengal   => "West Bengal",
            Self::Telangana    => "Telangana",
            Self::UttarPradesh => "Uttar Pradesh",
            Self::Kerala       => "Kerala",
        }
    }

    /// Map anchor as (lat, lng).
    pub fn coordinates(&self) -> (f64, f64) {
        match self {
            Self::Maharashtra  => (19.7515, 75.7139),
            Self::Delhi        => (28.7041, 77.1025),
            Self::Karnataka    => (15.3173, 75.7139),
            Self::TamilNadu    => (11.1271, 78.6569),
            Self::Gujarat      => (22.2587, 71.1924),
            Self::Rajasthan    => (27.0238, 74.2179),
            Self::WestBengal   => (22.9868, 87.855),
            Self::Telangana    => (18.1124, 79.0193),
            Self::UttarPradesh => (26.8467, 80.9462),
            Self::Kerala       => (10.8505, 76.2711),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = MockError;

    fn from_str(s: &str) -> MockResult<Self> {
        parse_label("region", s, &Self::ALL, Self::label)
    }
}

// ── Age groups ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-25")]
    From18To25,
    #[serde(rename = "26-35")]
    From26To35,
    #[serde(rename = "36-45")]
    From36To45,
    #[serde(rename = "46-55")]
    From46To55,
    #[serde(rename = "56+")]
    Over56,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        Self::From18To25,
        Self::From26To35,
        Self::From36To45,
        Self::From46To55,
        Self::Over56,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::From18To25 => "18-25",
            Self::From26To35 => "26-35",
            Self::From36To45 => "36-45",
            Self::From46To55 => "46-55",
            Self::Over56     => "56+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeGroup {
    type Err = MockError;

    fn from_str(s: &str) -> MockResult<Self> {
        parse_label("age group", s, &Self::ALL, Self::label)
    }
}

// ── Payment methods ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "Net Banking")]
    NetBanking,
    Wallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        Self::Upi,
        Self::CreditCard,
        Self::DebitCard,
        Self::NetBanking,
        Self::Wallet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Upi        => "UPI",
            Self::CreditCard => "Credit Card",
            Self::DebitCard  => "Debit Card",
            Self::NetBanking => "Net Banking",
            Self::Wallet     => "Wallet",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = MockError;

    fn from_str(s: &str) -> MockResult<Self> {
        parse_label("payment method", s, &Self::ALL, Self::label)
    }
}

// ── Time ranges (analyzer filter) ──────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "Last 7 Days")]
    Last7Days,
    #[default]
    #[serde(rename = "Last 30 Days")]
    Last30Days,
    #[serde(rename = "Last 90 Days")]
    Last90Days,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [Self::Last7Days, Self::Last30Days, Self::Last90Days];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Last7Days  => "Last 7 Days",
            Self::Last30Days => "Last 30 Days",
            Self::Last90Days => "Last 90 Days",
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            Self::Last7Days  => 7,
            Self::Last30Days => 30,
            Self::Last90Days => 90,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeRange {
    type Err = MockError;

    fn from_str(s: &str) -> MockResult<Self> {
        parse_label("time range", s, &Self::ALL, Self::label)
    }
}

// ── Calendar labels ────────────────────────────────────────────────

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// `"00:00"` through `"23:00"`.
pub fn hour_labels() -> Vec<String> {
    (0..24).map(|h| format!("{h:02}:00")).collect()
}
