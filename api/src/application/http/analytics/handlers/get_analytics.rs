use aahaara_core::domain::analytics::{entities::PractitionerAnalytics, ports::AnalyticsService};
use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "analytics",
    summary = "Get practice analytics",
    description = "Patient, chart and swap totals for the caller with their five most recent charts and swaps.",
    responses(
        (status = 200, body = PractitionerAnalytics),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_analytics(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<PractitionerAnalytics>, ApiError> {
    let analytics = state
        .service
        .get_analytics(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(analytics))
}
