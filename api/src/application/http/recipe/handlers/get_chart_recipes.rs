use aahaara_core::domain::recipe::{entities::FoodRecipes, ports::RecipeService};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetChartRecipesResponse {
    pub chart_id: Uuid,
    pub data: Vec<FoodRecipes>,
}

#[utoipa::path(
    get,
    path = "/diet-charts/{chart_id}/recipes",
    tag = "recipe",
    summary = "List recipes of a diet chart",
    description = "Groups the visible recipes of every food currently served in the chart.",
    params(
        ("chart_id" = Uuid, Path, description = "Diet chart ID"),
    ),
    responses(
        (status = 200, body = GetChartRecipesResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Diet chart not found")
    )
)]
pub async fn get_chart_recipes(
    Path(chart_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetChartRecipesResponse>, ApiError> {
    let data = state
        .service
        .get_chart_recipes(identity, chart_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetChartRecipesResponse { chart_id, data }))
}
