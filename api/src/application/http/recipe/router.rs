use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    generate_recipe::{__path_generate_recipe, generate_recipe},
    get_chart_recipes::{__path_get_chart_recipes, get_chart_recipes},
    get_recipe::{__path_get_recipe, get_recipe},
    get_recipes::{__path_get_recipes, get_recipes},
    recipe_chat::{__path_recipe_chat, recipe_chat},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_recipes, generate_recipe, recipe_chat, get_recipe, get_chart_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/foods/{{food_id}}/recipes"),
            get(get_recipes).post(generate_recipe),
        )
        .route(
            &format!("{root_path}/foods/{{food_id}}/recipe-chat"),
            post(recipe_chat),
        )
        .route(
            &format!("{root_path}/recipes/{{recipe_id}}"),
            get(get_recipe),
        )
        .route(
            &format!("{root_path}/diet-charts/{{chart_id}}/recipes"),
            get(get_chart_recipes),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
