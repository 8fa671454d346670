//! Dashboard Routes - Member overview at a glance
//!
//! Profile card, KPI tiles and dataset coverage in one response.

use axum::{extract::State, routing::get, Json, Router};

use crate::models::{DashboardResponse, DashboardStats};
use crate::AppState;

/// Get the dashboard - profile card, KPI tiles, dataset stats
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Dashboard data", body = DashboardResponse)
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let summary = state.journey.dashboard();

    let response = DashboardResponse {
        profile: summary.persona.into(),
        kpis: summary.kpis.into_iter().map(Into::into).collect(),
        stats: DashboardStats {
            data_source: state.journey.source_description(),
            message_count: summary.message_count,
            decision_count: summary.decision_count,
            metrics_days: summary.metrics_days,
            first_metrics_date: summary.metrics_span.map(|(first, _)| first),
            last_metrics_date: summary.metrics_span.map(|(_, last)| last),
        },
    };

    Json(response)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::test_support::fixture_state;

    #[tokio::test]
    async fn test_dashboard() {
        let (_dir, state) = fixture_state();
        let response = super::router()
            .with_state(state)
            .oneshot(Request::builder().uri("/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["profile"]["member"], "Rohan Patel");
        assert_eq!(body["profile"]["goals"].as_array().unwrap().len(), 2);
        assert_eq!(body["kpis"].as_array().unwrap().len(), 5);
        assert_eq!(body["stats"]["message_count"], 4);
        assert_eq!(body["stats"]["decision_count"], 3);
        assert_eq!(body["stats"]["first_metrics_date"], "2025-01-20");
        assert_eq!(body["stats"]["last_metrics_date"], "2025-01-23");
    }
}
