use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    food::{
        entities::Food,
        import::FoodImportReport,
        value_objects::{CreateFoodInput, GetFoodsFilter, UpdateFoodInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait FoodService: Send + Sync {
    fn get_foods(
        &self,
        identity: Identity,
        filter: GetFoodsFilter,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn get_food(
        &self,
        identity: Identity,
        food_id: Uuid,
    ) -> impl Future<Output = Result<Food, CoreError>> + Send;

    fn create_food(
        &self,
        identity: Identity,
        input: CreateFoodInput,
    ) -> impl Future<Output = Result<Food, CoreError>> + Send;

    fn update_food(
        &self,
        identity: Identity,
        input: UpdateFoodInput,
    ) -> impl Future<Output = Result<Food, CoreError>> + Send;

    /// Upserts every readable CSV row by food name.
    fn import_foods(
        &self,
        identity: Identity,
        csv: String,
    ) -> impl Future<Output = Result<FoodImportReport, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodRepository: Send + Sync {
    fn fetch_foods(
        &self,
        filter: GetFoodsFilter,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    /// Every active food, ordered by name.
    fn list_active(&self) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    /// Active foods sharing `category`, without `exclude_id`.
    fn list_active_in_category(
        &self,
        category: String,
        exclude_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn get_by_id(
        &self,
        food_id: Uuid,
    ) -> impl Future<Output = Result<Option<Food>, CoreError>> + Send;

    fn get_by_ids(
        &self,
        food_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Food>, CoreError>> + Send;

    fn create_food(&self, food: Food) -> impl Future<Output = Result<Food, CoreError>> + Send;

    fn update_food(&self, food: Food) -> impl Future<Output = Result<Food, CoreError>> + Send;
}

pub trait FoodPolicy: Send + Sync {
    fn can_manage_foods(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
