//! Synthetic analytics for a natural-language BI demo.
//!
//! Every number here is fabricated from bounded uniform draws over fixed
//! label sets. Nothing queries a database, parses language, or detects
//! fraud: questions are routed by keyword to canned branches, and orders
//! are assembled from curated item lists.

pub mod analysis;
pub mod analyzer;
pub mod api;
pub mod catalog;
pub mod classify;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod generator;
pub mod geo;
pub mod history;
pub mod order;
pub mod questions;
pub mod rng;
pub mod types;

pub use analysis::{generate_analysis_result, AnalysisResult, Branch, Metric};
pub use classify::{classify, Topic, TopicFlags};
pub use error::{MockError, MockResult};
pub use format::{format_currency, format_currency_compact};
pub use generator::MockGenerator;
pub use history::{generate_user_history, UserHistory};
pub use order::{generate_order, Order};
