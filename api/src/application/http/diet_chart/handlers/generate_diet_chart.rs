use aahaara_core::domain::diet_chart::{
    entities::{ARCHITECT_MODEL, GenerationOutcome, SkippedDay},
    ports::DietChartService,
    value_objects::GenerateDietChartInput,
};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        diet_chart::validators::GenerateDietChartValidator,
        server::{
            api_entities::{
                api_error::{ApiError, FailureResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SkippedRecipeReport {
    pub food: Uuid,
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerationReportResponse {
    pub succeeded_days: Vec<i32>,
    pub skipped_days: Vec<SkippedDay>,
    pub generated_recipes: Vec<Uuid>,
    pub existing_recipes: usize,
    pub skipped_recipes: Vec<SkippedRecipeReport>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateDietChartResponse {
    pub success: bool,
    pub diet_chart_id: Uuid,
    pub message: String,
    pub total_meals: i32,
    pub ai_model: String,
    pub fallback_used: bool,
    pub report: GenerationReportResponse,
}

impl From<GenerationOutcome> for GenerateDietChartResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        let report = outcome.report;

        Self {
            success: true,
            diet_chart_id: outcome.chart.id,
            message: outcome.message,
            total_meals: outcome.total_meals,
            ai_model: ARCHITECT_MODEL.to_string(),
            fallback_used: outcome.fallback_used,
            report: GenerationReportResponse {
                succeeded_days: report.succeeded_days,
                skipped_days: report.skipped_days,
                generated_recipes: report.generated_recipes,
                existing_recipes: report.existing_recipes,
                skipped_recipes: report
                    .skipped_recipes
                    .into_iter()
                    .map(|skipped| SkippedRecipeReport {
                        food: skipped.food_id,
                        reason: skipped.reason,
                    })
                    .collect(),
            },
        }
    }
}

#[utoipa::path(
    post,
    path = "/patients/{patient_id}/diet-charts",
    tag = "diet_chart",
    summary = "Generate diet chart",
    description = "Builds a multi-day diet chart for the patient from constitution-compatible foods. Days that cannot be filled are skipped and reported.",
    params(
        ("patient_id" = Uuid, Path, description = "Patient ID"),
    ),
    request_body = GenerateDietChartValidator,
    responses(
        (status = 201, body = GenerateDietChartResponse),
        (status = 400, body = FailureResponse, description = "Patient data incomplete or no usable foods"),
        (status = 403, body = FailureResponse, description = "Patient belongs to another practitioner"),
        (status = 404, body = FailureResponse, description = "Patient not found"),
        (status = 500, body = FailureResponse, description = "Generation failed")
    )
)]
pub async fn generate_diet_chart(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<GenerateDietChartValidator>,
) -> Result<Response<GenerateDietChartResponse>, ApiError> {
    let outcome = state
        .service
        .generate_diet_chart(
            identity,
            GenerateDietChartInput {
                patient_id,
                duration_days: payload.duration_days,
            },
        )
        .await
        .map_err(ApiError::failure)?;

    Ok(Response::Created(outcome.into()))
}
