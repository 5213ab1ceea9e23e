use aahaara_core::domain::specialist::{
    entities::SimilarFood, ports::SpecialistService, value_objects::SimilarFoodsForItemInput,
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
    path = "/meal-items/{item_id}/similar-foods",
    tag = "specialist",
    summary = "Suggest substitutes for a meal item",
    params(
        ("item_id" = Uuid, Path, description = "Meal item ID"),
        SimilarFoodsQuery,
    ),
    responses(
        (status = 200, body = Vec<SimilarFood>),
        (status = 404, description = "Meal item not found")
    )
)]
pub async fn similar_foods_for_item(
    Path(item_id): Path<Uuid>,
    Query(query): Query<SimilarFoodsQuery>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Vec<SimilarFood>>, ApiError> {
    let similar = state
        .service
        .similar_foods_for_item(
            identity,
            SimilarFoodsForItemInput {
                item_id,
                limit: query.limit,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(similar))
}
