use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    diet_chart::entities::MealItem,
    specialist::{
        entities::{FoodSwapLog, SimilarFood, SwapOutcome},
        value_objects::{
            FindSimilarFoodsInput, GetSwapLogsFilter, SimilarFoodsForItemInput, SwapFoodInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait SpecialistService: Send + Sync {
    fn find_similar_foods(
        &self,
        identity: Identity,
        input: FindSimilarFoodsInput,
    ) -> impl Future<Output = Result<Vec<SimilarFood>, CoreError>> + Send;

    fn similar_foods_for_item(
        &self,
        identity: Identity,
        input: SimilarFoodsForItemInput,
    ) -> impl Future<Output = Result<Vec<SimilarFood>, CoreError>> + Send;

    fn swap_food(
        &self,
        identity: Identity,
        input: SwapFoodInput,
    ) -> impl Future<Output = Result<SwapOutcome, CoreError>> + Send;

    fn get_swap_logs(
        &self,
        identity: Identity,
        filter: GetSwapLogsFilter,
    ) -> impl Future<Output = Result<Vec<FoodSwapLog>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SwapLogRepository: Send + Sync {
    /// Retires `previous_item_id`, inserts its replacement and appends the
    /// log entry in one transaction.
    fn record_swap(
        &self,
        previous_item_id: Uuid,
        replacement: MealItem,
        log: FoodSwapLog,
    ) -> impl Future<Output = Result<(MealItem, FoodSwapLog), CoreError>> + Send;

    fn fetch_logs_by_practitioner(
        &self,
        practitioner_id: Uuid,
        filter: GetSwapLogsFilter,
    ) -> impl Future<Output = Result<Vec<FoodSwapLog>, CoreError>> + Send;

    fn count_by_practitioner(
        &self,
        practitioner_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
