use aahaara_core::domain::food::{
    entities::Food, ports::FoodService, value_objects::GetFoodsFilter,
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
pub struct GetFoodsResponse {
    pub data: Vec<Food>,
    pub offset: i64,
    pub limit: i64,
    pub count: usize,
}

fn foods_filter(query_params: &QueryParams) -> GetFoodsFilter {
    let mut filter = GetFoodsFilter {
        offset: Some(query_params.pagination.offset as u32),
        limit: Some(query_params.pagination.limit as u32),
        sort: query_params.sort.to_sort_string(),
        ..Default::default()
    };

    for cond in &query_params.filter.conditions {
        match (cond.field.as_str(), cond.operator) {
            ("category", FilterOperator::Eq) => filter.category = Some(cond.value.clone()),
            ("category", FilterOperator::In) => filter.category_in = Some(cond.values()),
            ("name", FilterOperator::Eq | FilterOperator::Like) => {
                filter.name_like = Some(cond.value.clone())
            }
            ("primary_taste", FilterOperator::Eq) => filter.primary_taste = cond.value.parse().ok(),
            ("energy", FilterOperator::Eq) => filter.energy = cond.value.parse().ok(),
            ("calories", FilterOperator::Gte) => filter.calories_gte = cond.value.parse().ok(),
            ("calories", FilterOperator::Lte) => filter.calories_lte = cond.value.parse().ok(),
            ("is_vegetarian", FilterOperator::Eq) => filter.is_vegetarian = cond.value.parse().ok(),
            ("is_vegan", FilterOperator::Eq) => filter.is_vegan = cond.value.parse().ok(),
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
    tag = "food",
    summary = "List foods",
    description = "Lists the active food catalog. Supports filter[category], filter[category][in], filter[name][like], filter[primary_taste], filter[energy], filter[calories][gte|lte], filter[is_vegetarian], filter[is_vegan], sort and offset/limit.",
    responses(
        (status = 200, body = GetFoodsResponse)
    )
)]
pub async fn get_foods(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GetFoodsResponse>, ApiError> {
    let foods = state
        .service
        .get_foods(identity, foods_filter(&query_params))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFoodsResponse {
        count: foods.len(),
        data: foods,
        offset: query_params.pagination.offset,
        limit: query_params.pagination.limit,
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use aahaara_core::domain::food::entities::Energy;

    use super::*;

    #[test]
    fn maps_query_conditions_onto_the_filter() {
        let map: HashMap<String, String> = [
            ("filter[category][in]", "grains,dairy"),
            ("filter[energy]", "cooling"),
            ("filter[calories][lte]", "250"),
            ("filter[name][like]", "rice"),
            ("sort", "-calories"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let filter = foods_filter(&QueryParams::from_query_map(&map));

        assert_eq!(
            filter.category_in,
            Some(vec!["grains".to_string(), "dairy".to_string()])
        );
        assert_eq!(filter.energy, Some(Energy::Cooling));
        assert_eq!(filter.calories_lte, Some(250));
        assert_eq!(filter.name_like.as_deref(), Some("rice"));
        assert_eq!(filter.sort.as_deref(), Some("-calories"));
        assert_eq!(filter.limit, Some(20));
        assert!(!filter.include_inactive);
    }
}
