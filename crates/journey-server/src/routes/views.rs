//! View Routes - KPI tiles, decision timeline, chat search, metrics range
//!
//! Each request recomputes its view over the in-memory datasets.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use journey::{DateRange, DecisionType, DomainError, TimelineFilter};

use crate::models::{
    empty_state, ConversationQuery, ConversationResponse, KpiResponse, MessageResponse,
    MetricsQuery, MetricsRangeResponse, MetricsRowResponse, TimelineEntryResponse, TimelineQuery,
    TimelineResponse, NO_DECISIONS, NO_MESSAGES, NO_METRICS,
};
use crate::AppState;

/// KPI tiles
#[utoipa::path(
    get,
    path = "/views/kpis",
    responses(
        (status = 200, description = "One tile per configured metrics column", body = Vec<KpiResponse>)
    ),
    tag = "Views"
)]
pub async fn get_kpis(State(state): State<AppState>) -> Json<Vec<KpiResponse>> {
    Json(state.journey.kpis().into_iter().map(Into::into).collect())
}

/// Decision timeline with message trails
///
/// GET /views/timeline?query=interval&pillar=Autonomic&type=Plan%20Update
#[utoipa::path(
    get,
    path = "/views/timeline",
    params(TimelineQuery),
    responses(
        (status = 200, description = "Matching decisions, oldest first", body = TimelineResponse)
    ),
    tag = "Views"
)]
pub async fn get_timeline(
    State(state): State<AppState>,
    Query(query): Query<TimelineQuery>,
) -> Json<TimelineResponse> {
    let filter = TimelineFilter {
        query: query.query.unwrap_or_default(),
        pillar: query.pillar,
        decision_type: query
            .decision_type
            .filter(|t| !t.trim().is_empty())
            .map(DecisionType::from),
    };

    let entries: Vec<TimelineEntryResponse> = state
        .journey
        .timeline(&filter)
        .iter()
        .map(Into::into)
        .collect();

    tracing::debug!("Timeline {:?}: {} decisions", filter.query, entries.len());

    Json(TimelineResponse {
        count: entries.len(),
        empty_state: empty_state(entries.is_empty(), NO_DECISIONS),
        entries,
    })
}

/// Search the chat log, newest first
#[utoipa::path(
    get,
    path = "/views/conversation",
    params(ConversationQuery),
    responses(
        (status = 200, description = "Matching messages", body = ConversationResponse),
        (status = 400, description = "Invalid limit")
    ),
    tag = "Views"
)]
pub async fn search_conversation(
    State(state): State<AppState>,
    Query(query): Query<ConversationQuery>,
) -> Result<Json<ConversationResponse>, (StatusCode, String)> {
    let text = query.query.unwrap_or_default();
    let messages: Vec<MessageResponse> = state
        .journey
        .conversation(&text, query.limit)
        .map_err(|e| match e {
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?
        .into_iter()
        .map(Into::into)
        .collect();

    tracing::debug!("Conversation {:?}: {} messages", text, messages.len());

    Ok(Json(ConversationResponse {
        count: messages.len(),
        limit: query.limit.unwrap_or(state.journey.conversation_limit()),
        empty_state: empty_state(messages.is_empty(), NO_MESSAGES),
        messages,
    }))
}

/// Metrics rows within an inclusive date range
#[utoipa::path(
    get,
    path = "/views/metrics",
    params(MetricsQuery),
    responses(
        (status = 200, description = "Rows dated within [start, end]", body = MetricsRangeResponse),
        (status = 400, description = "Unparseable date")
    ),
    tag = "Views"
)]
pub async fn get_metrics_range(
    State(state): State<AppState>,
    Query(query): Query<MetricsQuery>,
) -> Json<MetricsRangeResponse> {
    let range = DateRange::new(query.start, query.end);
    let rows: Vec<MetricsRowResponse> = state
        .journey
        .metrics_in_range(range)
        .into_iter()
        .map(Into::into)
        .collect();

    Json(MetricsRangeResponse {
        start: range.start,
        end: range.end,
        count: rows.len(),
        empty_state: empty_state(rows.is_empty(), NO_METRICS),
        rows,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/views/kpis", get(get_kpis))
        .route("/views/timeline", get(get_timeline))
        .route("/views/conversation", get(search_conversation))
        .route("/views/metrics", get(get_metrics_range))
}
