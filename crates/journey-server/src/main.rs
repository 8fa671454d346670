use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::FileDatasetSource;
use application::JourneyService;
use config::ServerConfig;

/// Application service with the concrete dataset source
pub type AppJourneyService = JourneyService<FileDatasetSource>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub journey: Arc<AppJourneyService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Journey API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_router(state: AppState) -> Router {
    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::dataset::router())
        .merge(routes::views::router())
        .merge(routes::dashboard::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🩺 Journey API initializing...");

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!("📂 Data directory: {}", config.data_dir.display());

    // Load every dataset up front; nothing is served from partial data
    let source = Arc::new(FileDatasetSource::new(&config.data_dir));
    let journey = match JourneyService::load(
        source,
        config.kpi_columns.clone(),
        config.conversation_limit,
    ) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("❌ {}", e);
            return Err(e).context("Journey data could not be loaded");
        }
    };

    let state = AppState {
        journey: Arc::new(journey),
    };

    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("📚 Swagger UI: http://{}/swagger-ui", config.bind_addr);
    tracing::info!("✅ Journey API ready on http://{}", config.bind_addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::test_support::fixture_state;

    #[tokio::test]
    async fn test_health_and_read_api_are_mounted() {
        let (_dir, state) = fixture_state();
        let app = build_router(state);

        for uri in ["/health", "/messages", "/decisions", "/persona", "/metrics", "/dashboard"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_openapi_json_is_served() {
        let (_dir, state) = fixture_state();
        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc["info"]["title"], "Journey API");
    }

    #[test]
    fn test_missing_data_dir_fails_to_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = Arc::new(FileDatasetSource::new(dir.path().join("absent")));
        let result = JourneyService::load(source, vec![], 50);
        assert!(matches!(result, Err(e) if e.is_missing_data()));
    }
}
