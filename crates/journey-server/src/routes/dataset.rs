//! Read API - The four datasets, unfiltered
//!
//! Idempotent reads over the data loaded at startup.

use axum::{extract::State, routing::get, Json, Router};

use crate::models::{DecisionResponse, MessageResponse, MetricsRowResponse, PersonaResponse};
use crate::AppState;

/// List all messages
#[utoipa::path(
    get,
    path = "/messages",
    responses(
        (status = 200, description = "Full message log", body = Vec<MessageResponse>)
    ),
    tag = "Dataset"
)]
pub async fn list_messages(State(state): State<AppState>) -> Json<Vec<MessageResponse>> {
    Json(state.journey.messages().iter().map(Into::into).collect())
}

/// List all decisions
#[utoipa::path(
    get,
    path = "/decisions",
    responses(
        (status = 200, description = "Full decision log", body = Vec<DecisionResponse>)
    ),
    tag = "Dataset"
)]
pub async fn list_decisions(State(state): State<AppState>) -> Json<Vec<DecisionResponse>> {
    Json(state.journey.decisions().iter().map(Into::into).collect())
}

/// Get the persona record
#[utoipa::path(
    get,
    path = "/persona",
    responses(
        (status = 200, description = "Member persona", body = PersonaResponse)
    ),
    tag = "Dataset"
)]
pub async fn get_persona(State(state): State<AppState>) -> Json<PersonaResponse> {
    Json(state.journey.persona().into())
}

/// List all metrics rows, one object per row
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Full metrics table", body = Vec<MetricsRowResponse>)
    ),
    tag = "Dataset"
)]
pub async fn list_metrics(State(state): State<AppState>) -> Json<Vec<MetricsRowResponse>> {
    Json(state.journey.metrics().iter().map(Into::into).collect())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", get(list_messages))
        .route("/decisions", get(list_decisions))
        .route("/persona", get(get_persona))
        .route("/metrics", get(list_metrics))
}
