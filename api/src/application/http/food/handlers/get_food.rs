use aahaara_core::domain::food::{entities::Food, ports::FoodService};
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
    path = "/{food_id}",
    tag = "food",
    summary = "Get food",
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
    responses(
        (status = 200, body = Food),
        (status = 404, description = "Food not found")
    )
)]
pub async fn get_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Food>, ApiError> {
    let food = state
        .service
        .get_food(identity, food_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(food))
}
