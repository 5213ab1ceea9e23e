use aahaara_core::domain::diet_chart::{entities::DietChartDetail, ports::DietChartService};
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/diet-charts/{chart_id}",
    tag = "diet_chart",
    summary = "Get diet chart",
    description = "Returns the chart with its meal plans ordered by day and meal. Only current meal items are included.",
    params(
        ("chart_id" = Uuid, Path, description = "Diet chart ID"),
    ),
    responses(
        (status = 200, body = DietChartDetail),
        (status = 404, description = "Diet chart not found")
    )
)]
pub async fn get_diet_chart(
    Path(chart_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DietChartDetail>, ApiError> {
    let detail = state
        .service
        .get_diet_chart(identity, chart_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(detail))
}
