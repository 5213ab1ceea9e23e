use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    find_similar_foods::{__path_find_similar_foods, find_similar_foods},
    get_swap_logs::{__path_get_swap_logs, get_swap_logs},
    similar_foods_for_item::{__path_similar_foods_for_item, similar_foods_for_item},
    swap_food::{__path_swap_food, swap_food},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(find_similar_foods, similar_foods_for_item, swap_food, get_swap_logs))]
pub struct SpecialistApiDoc;

pub fn specialist_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/patients/{{patient_id}}/foods/{{food_id}}/similar"),
            get(find_similar_foods),
        )
        .route(
            &format!("{root_path}/meal-items/{{item_id}}/similar-foods"),
            get(similar_foods_for_item),
        )
        .route(
            &format!("{root_path}/meal-items/{{item_id}}/swap"),
            post(swap_food),
        )
        .route(&format!("{root_path}/swap-logs"), get(get_swap_logs))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
