use aahaara_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Checks the database round trip. Answers 503 while the database is unhealthy.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, body = DatabaseHealthStatus)
    )
)]
pub async fn health_ready(State(state): State<AppState>) -> Result<Response, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    let code = if status.is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((code, Json(status)).into_response())
}
