use aahaara_core::domain::specialist::{
    entities::SwapOutcome, ports::SpecialistService, value_objects::SwapFoodInput,
};
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        specialist::validators::SwapFoodValidator,
    },
};

#[utoipa::path(
    post,
    path = "/meal-items/{item_id}/swap",
    tag = "specialist",
    summary = "Swap the food of a meal item",
    description = "Replaces the item with a new current item for the chosen food, scaled to the same quantity, and records the substitution in the swap log.",
    params(
        ("item_id" = Uuid, Path, description = "Meal item ID"),
    ),
    request_body = SwapFoodValidator,
    responses(
        (status = 200, body = SwapOutcome),
        (status = 400, description = "Chart is archived or the item is already replaced"),
        (status = 404, description = "Meal item or food not found"),
        (status = 409, description = "Item was swapped concurrently")
    )
)]
pub async fn swap_food(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SwapFoodValidator>,
) -> Result<Response<SwapOutcome>, ApiError> {
    let outcome = state
        .service
        .swap_food(
            identity,
            SwapFoodInput {
                item_id,
                new_food_id: payload.new_food_id,
                reason: payload.reason,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}
