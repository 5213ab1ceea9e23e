use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    compatibility::filter::filter_candidates,
    diet_chart::{
        entities::{ChartStatus, DietChart, MealItem},
        ports::{DietChartPolicy, DietChartRepository},
    },
    food::{entities::Food, ports::FoodRepository},
    health::ports::HealthCheckRepository,
    patient::{entities::Patient, ports::PatientRepository},
    recipe::ports::{LLMClient, RecipeRepository},
    specialist::{
        entities::{FoodSwapLog, SimilarFood, SwapOutcome},
        ports::{SpecialistService, SwapLogRepository},
        scoring::{rank_similar, score},
        value_objects::{
            FindSimilarFoodsInput, GetSwapLogsFilter, SimilarFoodsForItemInput, SwapFoodInput,
        },
    },
};

struct ItemContext {
    item: MealItem,
    chart: DietChart,
    patient: Patient,
}

impl<F, P, D, SL, RC, HC, LLM, TV> Service<F, P, D, SL, RC, HC, LLM, TV>
where
    F: FoodRepository,
    P: PatientRepository,
    D: DietChartRepository,
    SL: SwapLogRepository,
    RC: RecipeRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    TV: TokenVerifier,
{
    async fn similar_to(
        &self,
        original: &Food,
        patient: &Patient,
        limit: usize,
    ) -> Result<Vec<SimilarFood>, CoreError> {
        let same_category = self
            .food_repository
            .list_active_in_category(original.category.clone(), original.id)
            .await?;

        let candidates =
            match filter_candidates(&same_category, patient, Some(original.id), &self.candidates) {
                Ok(set) => set.foods,
                Err(CoreError::NoCompatibleFoods) => return Ok(Vec::new()),
                Err(e) => return Err(e),
            };

        Ok(rank_similar(
            original,
            candidates,
            patient,
            &self.similarity,
            limit,
        ))
    }

    async fn item_context(&self, identity: &Identity, item_id: Uuid) -> Result<ItemContext, CoreError> {
        let item = self
            .diet_chart_repository
            .get_meal_item(item_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let plan = self
            .diet_chart_repository
            .get_meal_plan(item.meal_plan_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let chart = self
            .diet_chart_repository
            .get_chart(plan.diet_chart_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_view_chart(identity.clone(), &chart).await,
            "insufficient permissions",
        )?;

        let patient = self
            .patient_repository
            .get_by_id(chart.patient_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        Ok(ItemContext {
            item,
            chart,
            patient,
        })
    }
}

impl<F, P, D, SL, RC, HC, LLM, TV> SpecialistService for Service<F, P, D, SL, RC, HC, LLM, TV>
where
    F: FoodRepository,
    P: PatientRepository,
    D: DietChartRepository,
    SL: SwapLogRepository,
    RC: RecipeRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    TV: TokenVerifier,
{
    async fn find_similar_foods(
        &self,
        identity: Identity,
        input: FindSimilarFoodsInput,
    ) -> Result<Vec<SimilarFood>, CoreError> {
        let patient = self.visible_patient(&identity, input.patient_id).await?;
        let original = self
            .food_repository
            .get_by_id(input.food_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.similar_to(&original, &patient, self.similarity.limit(input.limit))
            .await
    }

    async fn similar_foods_for_item(
        &self,
        identity: Identity,
        input: SimilarFoodsForItemInput,
    ) -> Result<Vec<SimilarFood>, CoreError> {
        let context = self.item_context(&identity, input.item_id).await?;
        let original = self
            .food_repository
            .get_by_id(context.item.food_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.similar_to(
            &original,
            &context.patient,
            self.similarity.limit(input.limit),
        )
        .await
    }

    #[instrument(skip(self, identity, input), fields(item_id = %input.item_id))]
    async fn swap_food(
        &self,
        identity: Identity,
        input: SwapFoodInput,
    ) -> Result<SwapOutcome, CoreError> {
        let ItemContext {
            item,
            chart,
            patient,
        } = self.item_context(&identity, input.item_id).await?;

        ensure_policy(
            self.policy.can_manage_chart(identity.clone(), &chart).await,
            "insufficient permissions",
        )?;

        if chart.status == ChartStatus::Archived {
            return Err(CoreError::Invalid("archived charts cannot be changed".to_string()));
        }
        if !item.is_current {
            return Err(CoreError::Invalid(
                "meal item has already been swapped".to_string(),
            ));
        }
        if item.food_id == input.new_food_id {
            return Err(CoreError::Invalid(
                "new food must differ from the current food".to_string(),
            ));
        }

        let original_food = self
            .food_repository
            .get_by_id(item.food_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        let new_food = self
            .food_repository
            .get_by_id(input.new_food_id)
            .await?
            .filter(|food| food.is_active)
            .ok_or(CoreError::NotFound)?;

        let similarity_score = score(&original_food, &new_food, &patient, &self.similarity.weights);
        let alternatives = self
            .similar_to(&original_food, &patient, self.similarity.default_limit)
            .await?
            .into_iter()
            .map(|similar| similar.food.name)
            .collect();

        let reason = input.reason.unwrap_or_default();
        let replacement = item.replacement(&new_food, reason.clone(), similarity_score);
        let log = FoodSwapLog::new(
            item.id,
            identity.id(),
            original_food.id,
            new_food.id,
            reason,
            similarity_score,
            alternatives,
        );

        let (meal_item, log) = self
            .swap_log_repository
            .record_swap(item.id, replacement, log)
            .await?;

        info!(
            "swapped {} with {} (similarity {:.2})",
            original_food.name, new_food.name, similarity_score
        );

        Ok(SwapOutcome {
            original_food,
            new_food,
            meal_item,
            log,
        })
    }

    async fn get_swap_logs(
        &self,
        identity: Identity,
        filter: GetSwapLogsFilter,
    ) -> Result<Vec<FoodSwapLog>, CoreError> {
        self.swap_log_repository
            .fetch_logs_by_practitioner(identity.id(), filter)
            .await
    }
}
