use aahaara_core::domain::diet_chart::{entities::DietChart, ports::DietChartService};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDietChartsResponse {
    pub data: Vec<DietChart>,
}

#[utoipa::path(
    get,
    path = "/patients/{patient_id}/diet-charts",
    tag = "diet_chart",
    summary = "List diet charts of a patient",
    params(
        ("patient_id" = Uuid, Path, description = "Patient ID"),
    ),
    responses(
        (status = 200, body = GetDietChartsResponse),
        (status = 404, description = "Patient not found")
    )
)]
pub async fn get_diet_charts(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetDietChartsResponse>, ApiError> {
    let charts = state
        .service
        .get_diet_charts(identity, patient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDietChartsResponse { data: charts }))
}
