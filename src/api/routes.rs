//! Application route configuration.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_routes, video_routes};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public authentication routes
        .nest("/auth", auth_routes())
        // Video routes (upload requires JWT via the CurrentUser extractor)
        .nest("/videos", video_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to Clipstream"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    /// Store that would serve the next operation
    active_store: &'static str,
    stores: StoreHealth,
}

/// Individual store health status
#[derive(Serialize)]
struct StoreHealth {
    durable: &'static str,
    fallback: &'static str,
}

/// Health check endpoint reporting which store is serving traffic.
///
/// Degraded (fallback active) is still a 200 in development; only a
/// production deployment with the durable store down reports 503, since
/// the fallback never serves production traffic.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let durable_up = state.selector.try_connect().await;
    let production = state.selector.mode().is_production();

    let (status_code, status, active_store) = match (durable_up, production) {
        (true, _) => (StatusCode::OK, "healthy", "durable"),
        (false, false) => (StatusCode::OK, "degraded", "fallback"),
        (false, true) => (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "none"),
    };

    let response = HealthResponse {
        status,
        active_store,
        stores: StoreHealth {
            durable: if durable_up { "healthy" } else { "unreachable" },
            fallback: if production { "disabled" } else { "available" },
        },
    };

    (status_code, Json(response))
}
