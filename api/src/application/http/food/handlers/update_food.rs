use aahaara_core::domain::food::{
    entities::Food, ports::FoodService, value_objects::UpdateFoodInput,
};
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        food::validators::UpdateFoodValidator,
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
    path = "/{food_id}",
    tag = "food",
    summary = "Update food",
    description = "Edits a catalog entry. Omitted fields keep their value.",
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
    request_body = UpdateFoodValidator,
    responses(
        (status = 200, body = Food),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Food not found")
    )
)]
pub async fn update_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateFoodValidator>,
) -> Result<Response<Food>, ApiError> {
    let food = state
        .service
        .update_food(
            identity,
            UpdateFoodInput {
                food_id,
                name: payload.name,
                category: payload.category,
                subcategory: payload.subcategory,
                calories: payload.calories,
                protein: payload.protein,
                carbohydrates: payload.carbohydrates,
                fat: payload.fat,
                fiber: payload.fiber,
                primary_taste: payload.primary_taste,
                secondary_taste: payload.secondary_taste,
                energy: payload.energy,
                vata_effect: payload.vata_effect,
                pitta_effect: payload.pitta_effect,
                kapha_effect: payload.kapha_effect,
                dietary: payload.dietary,
                allergens: payload.allergens,
                is_active: payload.is_active,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(food))
}
