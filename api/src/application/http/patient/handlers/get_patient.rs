use aahaara_core::domain::patient::{entities::Patient, ports::PatientService};
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
    path = "/{patient_id}",
    tag = "patient",
    summary = "Get patient",
    params(
        ("patient_id" = Uuid, Path, description = "Patient ID"),
    ),
    responses(
        (status = 200, body = Patient),
        (status = 403, description = "Patient belongs to another practitioner"),
        (status = 404, description = "Patient not found")
    )
)]
pub async fn get_patient(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Patient>, ApiError> {
    let patient = state
        .service
        .get_patient(identity, patient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(patient))
}
