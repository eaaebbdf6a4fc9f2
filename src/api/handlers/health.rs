//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{
    CacheCheck, DatabaseCheck, HealthChecks, HealthResponse, OverallStatus,
};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "players": 11, "message": "Connected, 11 players" },
///     "cache": { "status": "ok", "backend": "memory", "message": "memory backend ready" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let checks = HealthChecks {
        database: check_database(&state).await,
        cache: CacheCheck::new(state.cache.backend(), state.cache.health_check().await),
    };
    let status = checks.overall();

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks,
    };

    match status {
        OverallStatus::Healthy => Ok(Json(response)),
        OverallStatus::Degraded => Err((StatusCode::SERVICE_UNAVAILABLE, Json(response))),
    }
}

async fn check_database(state: &AppState) -> DatabaseCheck {
    match state.player_service.count().await {
        Ok(count) => DatabaseCheck::connected(count),
        Err(e) => DatabaseCheck::failed(e),
    }
}
