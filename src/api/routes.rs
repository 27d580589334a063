//! Application route configuration.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::employee_routes;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::EMPLOYEES_API_PREFIX;
use crate::errors::AppError;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(EMPLOYEES_API_PREFIX, employee_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: ServiceStatus,
}

/// Individual service health status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, database) = match state.database.ping().await {
        Ok(_) => (
            StatusCode::OK,
            ServiceStatus {
                status: "healthy",
                error: None,
            },
        ),
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ServiceStatus {
                    status: "unhealthy",
                    error: Some(e.to_string()),
                },
            )
        }
    };

    let response = HealthResponse {
        status: database.status,
        database,
    };

    (status_code, Json(response))
}

async fn not_found() -> AppError {
    AppError::NotFound
}
