use aahaara_core::domain::food::{
    entities::Food, ports::FoodService, value_objects::CreateFoodInput,
};
use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        food::validators::CreateFoodValidator,
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
    tag = "food",
    summary = "Create food",
    description = "Adds a food to the catalog. Requires the catalog admin role.",
    request_body = CreateFoodValidator,
    responses(
        (status = 201, body = Food),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "A food with this name exists")
    )
)]
pub async fn create_food(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateFoodValidator>,
) -> Result<Response<Food>, ApiError> {
    let food = state
        .service
        .create_food(
            identity,
            CreateFoodInput {
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
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(food))
}
