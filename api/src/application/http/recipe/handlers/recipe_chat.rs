use aahaara_core::domain::recipe::{
    entities::RecipeSuggestion, ports::RecipeService, value_objects::RecipeChatInput,
};
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::RecipeChatValidator,
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
    path = "/foods/{food_id}/recipe-chat",
    tag = "recipe",
    summary = "Ask for a recipe suggestion",
    description = "Asks the language model for an Ayurvedic recipe built around the food. Suggestions are not stored.",
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
    request_body = RecipeChatValidator,
    responses(
        (status = 200, body = RecipeSuggestion),
        (status = 404, description = "Food not found"),
        (status = 502, description = "Language model unavailable or returned an unusable answer")
    )
)]
pub async fn recipe_chat(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RecipeChatValidator>,
) -> Result<Response<RecipeSuggestion>, ApiError> {
    let suggestion = state
        .service
        .recipe_chat(
            identity,
            RecipeChatInput {
                food_id,
                request: payload.request,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(suggestion))
}
