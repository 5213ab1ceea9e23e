use axum::{
    Router, middleware,
    routing::{get, put},
};
use utoipa::OpenApi;

use super::handlers::{
    generate_diet_chart::{__path_generate_diet_chart, generate_diet_chart},
    get_diet_chart::{__path_get_diet_chart, get_diet_chart},
    get_diet_charts::{__path_get_diet_charts, get_diet_charts},
    update_chart_status::{__path_update_chart_status, update_chart_status},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    generate_diet_chart,
    get_diet_charts,
    get_diet_chart,
    update_chart_status
))]
pub struct DietChartApiDoc;

pub fn diet_chart_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/patients/{{patient_id}}/diet-charts"),
            get(get_diet_charts).post(generate_diet_chart),
        )
        .route(
            &format!("{root_path}/diet-charts/{{chart_id}}"),
            get(get_diet_chart),
        )
        .route(
            &format!("{root_path}/diet-charts/{{chart_id}}/status"),
            put(update_chart_status),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
