use aahaara_core::domain::specialist::{
    entities::FoodSwapLog, ports::SpecialistService, value_objects::GetSwapLogsFilter,
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
pub struct GetSwapLogsResponse {
    pub data: Vec<FoodSwapLog>,
    pub offset: i64,
    pub limit: i64,
    pub count: usize,
}

fn swap_logs_filter(query_params: &QueryParams) -> GetSwapLogsFilter {
    let mut filter = GetSwapLogsFilter {
        offset: Some(query_params.pagination.offset as u32),
        limit: Some(query_params.pagination.limit as u32),
        ..Default::default()
    };

    for cond in query_params
        .filter
        .conditions
        .iter()
        .filter(|cond| cond.operator == FilterOperator::Eq)
    {
        let Ok(id) = cond.value.parse() else {
            continue;
        };
        match cond.field.as_str() {
            "meal_item_id" => filter.meal_item_id = Some(id),
            "original_food_id" => filter.original_food_id = Some(id),
            "new_food_id" => filter.new_food_id = Some(id),
            _ => {}
        }
    }

    filter
}

#[utoipa::path(
    get,
    path = "/swap-logs",
    tag = "specialist",
    summary = "List swap history",
    description = "Returns the caller's food substitutions, newest first. Supports filter[meal_item_id], filter[original_food_id], filter[new_food_id] and offset/limit.",
    responses(
        (status = 200, body = GetSwapLogsResponse)
    )
)]
pub async fn get_swap_logs(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GetSwapLogsResponse>, ApiError> {
    let logs = state
        .service
        .get_swap_logs(identity, swap_logs_filter(&query_params))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSwapLogsResponse {
        count: logs.len(),
        data: logs,
        offset: query_params.pagination.offset,
        limit: query_params.pagination.limit,
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use uuid::Uuid;

    use super::*;

    #[test]
    fn malformed_ids_are_dropped() {
        let item_id = Uuid::new_v4();
        let map: HashMap<String, String> = [
            ("filter[meal_item_id]", item_id.to_string()),
            ("filter[new_food_id]", "not-a-uuid".to_string()),
            ("offset", "40".to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let filter = swap_logs_filter(&QueryParams::from_query_map(&map));

        assert_eq!(filter.meal_item_id, Some(item_id));
        assert_eq!(filter.new_food_id, None);
        assert_eq!(filter.offset, Some(40));
    }
}
