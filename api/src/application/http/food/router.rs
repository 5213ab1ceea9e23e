use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_food::{__path_create_food, create_food},
    get_food::{__path_get_food, get_food},
    get_foods::{__path_get_foods, get_foods},
    get_sample_csv::{__path_get_sample_csv, get_sample_csv},
    import_foods::{__path_import_foods, import_foods},
    update_food::{__path_update_food, update_food},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_foods, get_food, create_food, update_food, import_foods, get_sample_csv))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/foods", state.args.server.root_path),
            get(get_foods).post(create_food),
        )
        .route(
            &format!("{}/foods/import", state.args.server.root_path),
            post(import_foods),
        )
        .route(
            &format!("{}/foods/import/sample", state.args.server.root_path),
            get(get_sample_csv),
        )
        .route(
            &format!("{}/foods/{{food_id}}", state.args.server.root_path),
            get(get_food).put(update_food),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
