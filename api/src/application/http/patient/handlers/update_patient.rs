use aahaara_core::domain::patient::{
    entities::Patient, ports::PatientService, value_objects::UpdatePatientInput,
};
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        patient::validators::UpdatePatientValidator,
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
    path = "/{patient_id}",
    tag = "patient",
    summary = "Update patient",
    params(
        ("patient_id" = Uuid, Path, description = "Patient ID"),
    ),
    request_body = UpdatePatientValidator,
    responses(
        (status = 200, body = Patient),
        (status = 403, description = "Patient belongs to another practitioner"),
        (status = 404, description = "Patient not found")
    )
)]
pub async fn update_patient(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdatePatientValidator>,
) -> Result<Response<Patient>, ApiError> {
    let patient = state
        .service
        .update_patient(
            identity,
            UpdatePatientInput {
                patient_id,
                name: payload.name,
                constitution: payload.constitution,
                age: payload.age,
                height: payload.height,
                weight: payload.weight,
                gender: payload.gender,
                activity_level: payload.activity_level,
                allergies: payload.allergies,
                dietary_preferences: payload.dietary_preferences,
                food_dislikes: payload.food_dislikes,
                medical_conditions: payload.medical_conditions,
                primary_goal: payload.primary_goal,
                target_weight: payload.target_weight,
                is_active: payload.is_active,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(patient))
}
