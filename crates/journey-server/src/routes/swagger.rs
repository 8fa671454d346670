//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ConversationResponse,
    DashboardResponse,
    DashboardStats,
    // Dataset models
    DecisionResponse,
    // View models
    KpiResponse,
    MessageResponse,
    MetricsRangeResponse,
    MetricsRowResponse,
    PersonaResponse,
    TimelineEntryResponse,
    TimelineResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Read API
        super::dataset::list_messages,
        super::dataset::list_decisions,
        super::dataset::get_persona,
        super::dataset::list_metrics,
        // Views
        super::views::get_kpis,
        super::views::get_timeline,
        super::views::search_conversation,
        super::views::get_metrics_range,
        // Dashboard
        super::dashboard::get_dashboard,
    ),
    info(
        title = "Journey API",
        version = "0.1.0",
        description = "Member health journey - read API and dashboard views over the message log, decision log, persona and metrics.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Dataset", description = "Raw datasets, read-only"),
        (name = "Views", description = "KPI tiles, decision timeline, chat search, metrics range"),
        (name = "Dashboard", description = "Profile card and headline numbers"),
    ),
    components(
        schemas(
            // Dataset
            MessageResponse,
            DecisionResponse,
            PersonaResponse,
            MetricsRowResponse,
            // Views
            KpiResponse,
            TimelineEntryResponse,
            TimelineResponse,
            ConversationResponse,
            MetricsRangeResponse,
            // Dashboard
            DashboardResponse,
            DashboardStats,
        )
    ),
)]
pub struct ApiDoc;
