use aahaara_core::domain::specialist::{
    entities::SimilarFood, ports::SpecialistService, value_objects::FindSimilarFoodsInput,
};
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        specialist::validators::SimilarFoodsQuery,
    },
};

#[utoipa::path(
    get,
    path = "/patients/{patient_id}/foods/{food_id}/similar",
    tag = "specialist",
    summary = "Find similar foods",
    description = "Ranks constitution-compatible substitutes for a food by weighted Ayurvedic, nutritional, category and compatibility similarity.",
    params(
        ("patient_id" = Uuid, Path, description = "Patient ID"),
        ("food_id" = Uuid, Path, description = "Food to replace"),
        SimilarFoodsQuery,
    ),
    responses(
        (status = 200, body = Vec<SimilarFood>),
        (status = 404, description = "Patient or food not found")
    )
)]
pub async fn find_similar_foods(
    Path((patient_id, food_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<SimilarFoodsQuery>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Vec<SimilarFood>>, ApiError> {
    let similar = state
        .service
        .find_similar_foods(
            identity,
            FindSimilarFoodsInput {
                patient_id,
                food_id,
                limit: query.limit,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(similar))
}
