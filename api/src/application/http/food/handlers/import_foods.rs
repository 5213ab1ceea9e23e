use aahaara_core::domain::food::{import::FoodImportReport, ports::FoodService};
use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/import",
    tag = "food",
    summary = "Import foods from CSV",
    description = "Creates or updates catalog foods by name from a CSV body with a header row. Unreadable rows are reported, not fatal. Requires the catalog admin role.",
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, body = FoodImportReport),
        (status = 400, description = "Empty body"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn import_foods(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    body: String,
) -> Result<Response<FoodImportReport>, ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::BadRequest("CSV body is empty".to_string()));
    }

    let report = state
        .service
        .import_foods(identity, body)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
