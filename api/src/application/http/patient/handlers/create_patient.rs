use aahaara_core::domain::patient::{
    entities::Patient, ports::PatientService, value_objects::CreatePatientInput,
};
use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        patient::validators::CreatePatientValidator,
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
    post,
    path = "",
    tag = "patient",
    summary = "Create patient",
    description = "Registers a patient under the calling practitioner. BMI and daily calorie needs are derived when height, weight and age are present.",
    request_body = CreatePatientValidator,
    responses(
        (status = 201, body = Patient),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_patient(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreatePatientValidator>,
) -> Result<Response<Patient>, ApiError> {
    let patient = state
        .service
        .create_patient(
            identity,
            CreatePatientInput {
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
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(patient))
}
