use aahaara_core::domain::diet_chart::{
    entities::DietChart, ports::DietChartService, value_objects::UpdateChartStatusInput,
};
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        diet_chart::validators::UpdateChartStatusValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/diet-charts/{chart_id}/status",
    tag = "diet_chart",
    summary = "Update diet chart status",
    description = "Moves a chart between draft, active, completed and archived. Archived charts cannot be reopened.",
    params(
        ("chart_id" = Uuid, Path, description = "Diet chart ID"),
    ),
    request_body = UpdateChartStatusValidator,
    responses(
        (status = 200, body = DietChart),
        (status = 400, description = "Transition not allowed"),
        (status = 404, description = "Diet chart not found")
    )
)]
pub async fn update_chart_status(
    Path(chart_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateChartStatusValidator>,
) -> Result<Response<DietChart>, ApiError> {
    let chart = state
        .service
        .update_chart_status(
            identity,
            UpdateChartStatusInput {
                chart_id,
                status: payload.status,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(chart))
}
