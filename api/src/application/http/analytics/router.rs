use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::get_analytics::{__path_get_analytics, get_analytics};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_analytics))]
pub struct AnalyticsApiDoc;

pub fn analytics_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analytics", state.args.server.root_path),
            get(get_analytics),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
