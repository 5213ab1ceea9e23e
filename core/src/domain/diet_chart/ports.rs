use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    diet_chart::{
        entities::{
            ChartCounts, DietChart, DietChartDetail, GenerationOutcome, MealItem, MealPlan,
        },
        value_objects::{GenerateDietChartInput, UpdateChartStatusInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait DietChartService: Send + Sync {
    fn generate_diet_chart(
        &self,
        identity: Identity,
        input: GenerateDietChartInput,
    ) -> impl Future<Output = Result<GenerationOutcome, CoreError>> + Send;

    fn get_diet_charts(
        &self,
        identity: Identity,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Vec<DietChart>, CoreError>> + Send;

    fn get_diet_chart(
        &self,
        identity: Identity,
        chart_id: Uuid,
    ) -> impl Future<Output = Result<DietChartDetail, CoreError>> + Send;

    fn update_chart_status(
        &self,
        identity: Identity,
        input: UpdateChartStatusInput,
    ) -> impl Future<Output = Result<DietChart, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DietChartRepository: Send + Sync {
    fn create_chart(
        &self,
        chart: DietChart,
    ) -> impl Future<Output = Result<DietChart, CoreError>> + Send;

    /// Persists one day of meal plans with their items atomically.
    fn save_day(
        &self,
        plans: Vec<MealPlan>,
    ) -> impl Future<Output = Result<Vec<MealPlan>, CoreError>> + Send;

    fn get_chart(
        &self,
        chart_id: Uuid,
    ) -> impl Future<Output = Result<Option<DietChart>, CoreError>> + Send;

    fn list_charts_by_patient(
        &self,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Vec<DietChart>, CoreError>> + Send;

    /// Newest first.
    fn list_recent_charts(
        &self,
        practitioner_id: Uuid,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<DietChart>, CoreError>> + Send;

    fn count_charts_by_practitioner(
        &self,
        practitioner_id: Uuid,
    ) -> impl Future<Output = Result<ChartCounts, CoreError>> + Send;

    /// Meal plans ordered by day and meal type, each with its current items.
    fn get_meal_plans(
        &self,
        chart_id: Uuid,
    ) -> impl Future<Output = Result<Vec<MealPlan>, CoreError>> + Send;

    /// The plan alone, without items.
    fn get_meal_plan(
        &self,
        meal_plan_id: Uuid,
    ) -> impl Future<Output = Result<Option<MealPlan>, CoreError>> + Send;

    fn get_meal_item(
        &self,
        item_id: Uuid,
    ) -> impl Future<Output = Result<Option<MealItem>, CoreError>> + Send;

    fn update_chart(
        &self,
        chart: DietChart,
    ) -> impl Future<Output = Result<DietChart, CoreError>> + Send;
}

pub trait DietChartPolicy: Send + Sync {
    fn can_view_chart(
        &self,
        identity: Identity,
        chart: &DietChart,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_manage_chart(
        &self,
        identity: Identity,
        chart: &DietChart,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
