use aahaara_core::domain::patient::{
    entities::Patient, ports::PatientService, value_objects::GetPatientsFilter,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        query_extractor::QueryParamsExtractor,
        query_params::{FilterOperator, QueryParams},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPatientsResponse {
    pub data: Vec<Patient>,
    pub offset: i64,
    pub limit: i64,
    pub count: usize,
}

fn patients_filter(query_params: &QueryParams) -> GetPatientsFilter {
    let mut filter = GetPatientsFilter {
        offset: Some(query_params.pagination.offset as u32),
        limit: Some(query_params.pagination.limit as u32),
        sort: query_params.sort.to_sort_string(),
        ..Default::default()
    };

    for cond in &query_params.filter.conditions {
        match (cond.field.as_str(), cond.operator) {
            ("name", FilterOperator::Eq | FilterOperator::Like) => {
                filter.name_like = Some(cond.value.clone())
            }
            ("constitution", FilterOperator::Eq) => filter.constitution = cond.value.parse().ok(),
            ("is_active", FilterOperator::Eq) => {
                filter.include_inactive = cond.value.parse::<bool>().is_ok_and(|active| !active)
            }
            _ => {}
        }
    }

    filter
}

#[utoipa::path(
    get,
    path = "",
    tag = "patient",
    summary = "List patients",
    description = "Lists the caller's patients. Supports filter[name][like], filter[constitution], filter[is_active], sort and offset/limit.",
    responses(
        (status = 200, body = GetPatientsResponse)
    )
)]
pub async fn get_patients(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GetPatientsResponse>, ApiError> {
    let patients = state
        .service
        .get_patients(identity, patients_filter(&query_params))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPatientsResponse {
        count: patients.len(),
        data: patients,
        offset: query_params.pagination.offset,
        limit: query_params.pagination.limit,
    }))
}
