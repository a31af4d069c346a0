//! JSON request boundary.
//!
//! One request per line, tagged by `type`. Every reply uses the same
//! envelope: `{"success": true, "data": ...}` or
//! `{"success": false, "error": "Invalid request"}`. Nothing a caller
//! sends can make this layer panic.

use crate::{
    analyzer::AnalysisFilter,
    clock::Clock,
    generator::MockGenerator,
    geo::GeoView,
    questions::{all_questions, search_questions, QuestionCategory},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User id served when a history request names none.
pub const DEFAULT_USER_ID: &str = "USR-00000";

pub const INVALID_REQUEST: &str = "Invalid request";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    Analyze {
        #[serde(default)]
        query: String,
    },
    AnalyzeFilters {
        #[serde(default)]
        filter: AnalysisFilter,
    },
    LiveOrders,
    FeedTick,
    UserHistory {
        #[serde(default)]
        user_id: Option<String>,
    },
    MapData {
        #[serde(default)]
        view: Option<GeoView>,
    },
    Questions {
        #[serde(default)]
        category: Option<QuestionCategory>,
        #[serde(default)]
        search: Option<String>,
    },
    Dashboard {
        panel: Panel,
    },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Overview,
    Fraud,
    TimeTrends,
    Devices,
    Categories,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data:    Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total:   Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error:   Option<String>,
}

impl Response {
    pub fn ok<T: Serialize>(data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self { success: true, data: Some(value), total: None, error: None },
            Err(e) => {
                log::warn!("api: failed to encode response: {e}");
                Self::error("Internal error")
            }
        }
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { success: false, data: None, total: None, error: Some(message.into()) }
    }

    pub fn invalid() -> Self {
        Self::error(INVALID_REQUEST)
    }

    /// Single-line JSON encoding.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| format!(r#"{{"success":false,"error":"{INVALID_REQUEST}"}}"#))
    }
}

/// Outcome of one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Respond(Response),
    Quit,
}

impl<C: Clock> MockGenerator<C> {
    pub fn handle(&mut self, request: Request) -> Reply {
        let response = match request {
            Request::Quit => return Reply::Quit,
            Request::Analyze { query } => Response::ok(&self.analyze(&query)),
            Request::AnalyzeFilters { filter } => Response::ok(&self.analyze_filters(&filter)),
            Request::LiveOrders => Response::ok(&self.live_orders()),
            Request::FeedTick => {
                let orders: Vec<_> = self.advance_feed().orders().cloned().collect();
                let total = orders.len();
                Response::ok(&orders).with_total(total)
            }
            Request::UserHistory { user_id } => {
                let user_id = user_id
                    .filter(|id| !id.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_USER_ID.to_string());
                Response::ok(&self.user_history(&user_id))
            }
            Request::MapData { view } => Response::ok(&self.geo_data(view)),
            Request::Questions { category, search } => {
                let mut questions = match &search {
                    Some(term) => search_questions(term),
                    None => all_questions(),
                };
                if let Some(category) = category {
                    questions.retain(|q| q.category == category);
                }
                let total = questions.len();
                Response::ok(&questions).with_total(total)
            }
            Request::Dashboard { panel } => match panel {
                Panel::Overview   => Response::ok(&self.overview()),
                Panel::Fraud      => Response::ok(&self.fraud_dashboard()),
                Panel::TimeTrends => Response::ok(&self.time_trends()),
                Panel::Devices    => Response::ok(&self.device_dashboard()),
                Panel::Categories => Response::ok(&self.category_dashboard()),
            },
        };
        Reply::Respond(response)
    }

    /// Decode and serve one JSON line. Malformed input is answered with
    /// the invalid-request envelope, never an error.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match serde_json::from_str::<Request>(line.trim()) {
            Ok(request) => self.handle(request),
            Err(e) => {
                log::warn!("api: rejected request: {e}");
                Reply::Respond(Response::invalid())
            }
        }
    }
}

