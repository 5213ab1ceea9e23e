use aahaara_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GenerateRecipeInput,
};
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::GenerateRecipeValidator,
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
    path = "/foods/{food_id}/recipes",
    tag = "recipe",
    summary = "Generate recipe",
    description = "Creates a rule-based recipe for the food from the template matching its category and meal type.",
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
    request_body = GenerateRecipeValidator,
    responses(
        (status = 201, body = Recipe),
        (status = 404, description = "Food not found"),
        (status = 409, description = "Recipe already exists")
    )
)]
pub async fn generate_recipe(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<Recipe>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(
            identity,
            GenerateRecipeInput {
                food_id,
                meal_type: payload.meal_type,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(recipe))
}
