use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    create_patient::{__path_create_patient, create_patient},
    get_patient::{__path_get_patient, get_patient},
    get_patients::{__path_get_patients, get_patients},
    update_patient::{__path_update_patient, update_patient},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_patients, get_patient, create_patient, update_patient))]
pub struct PatientApiDoc;

pub fn patient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/patients", state.args.server.root_path),
            get(get_patients).post(create_patient),
        )
        .route(
            &format!("{}/patients/{{patient_id}}", state.args.server.root_path),
            get(get_patient).put(update_patient),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
