//! View DTOs - KPI tiles, timeline, conversation search, metrics range

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use journey::{Kpi, TimelineEntry};

use super::{DecisionResponse, MessageResponse, MetricsRowResponse};

pub const NO_DECISIONS: &str = "No decisions match your search.";
pub const NO_MESSAGES: &str = "No messages match your search.";
pub const NO_METRICS: &str = "No metrics data for the selected date range.";

/// KPI tile
#[derive(Debug, Serialize, ToSchema)]
pub struct KpiResponse {
    pub column: String,
    pub label: String,
    /// Column sum, one decimal
    pub total: f64,
    /// First-to-last percent change; null when unavailable
    pub change_pct: Option<f64>,
}

impl From<Kpi> for KpiResponse {
    fn from(kpi: Kpi) -> Self {
        Self {
            column: kpi.column,
            label: kpi.label,
            total: kpi.total,
            change_pct: kpi.change_pct,
        }
    }
}

/// Query parameters for the timeline view
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TimelineQuery {
    /// Text matched against title, type and rationale
    pub query: Option<String>,
    /// Pillar tag (case-insensitive)
    pub pillar: Option<String>,
    /// Decision type label, e.g. "Medication"
    #[serde(rename = "type")]
    pub decision_type: Option<String>,
}

/// Decision with its message trail
#[derive(Debug, Serialize, ToSchema)]
pub struct TimelineEntryResponse {
    pub decision: DecisionResponse,
    pub icon: String,
    /// Cited messages, oldest first
    pub trail: Vec<MessageResponse>,
}

impl From<&TimelineEntry<'_>> for TimelineEntryResponse {
    fn from(entry: &TimelineEntry<'_>) -> Self {
        Self {
            decision: entry.decision.into(),
            icon: entry.decision.decision_type.icon().to_string(),
            trail: entry.trail.iter().map(|m| MessageResponse::from(*m)).collect(),
        }
    }
}

/// Timeline view
#[derive(Debug, Serialize, ToSchema)]
pub struct TimelineResponse {
    pub count: usize,
    pub entries: Vec<TimelineEntryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<String>,
}

/// Query parameters for conversation search
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ConversationQuery {
    /// Text matched against message bodies
    pub query: Option<String>,
    /// Maximum messages returned (default from server config)
    pub limit: Option<usize>,
}

/// Conversation search results, newest first
#[derive(Debug, Serialize, ToSchema)]
pub struct ConversationResponse {
    pub count: usize,
    pub limit: usize,
    pub messages: Vec<MessageResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<String>,
}

/// Query parameters for the metrics range view (inclusive)
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MetricsQuery {
    /// First day, YYYY-MM-DD
    pub start: Option<NaiveDate>,
    /// Last day, YYYY-MM-DD
    pub end: Option<NaiveDate>,
}

/// Metrics rows within a date range
#[derive(Debug, Serialize, ToSchema)]
pub struct MetricsRangeResponse {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub count: usize,
    pub rows: Vec<MetricsRowResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<String>,
}

/// `Some(message)` when a list came back empty
pub fn empty_state(is_empty: bool, message: &str) -> Option<String> {
    is_empty.then(|| message.to_string())
}
