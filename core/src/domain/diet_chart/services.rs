use rand::{SeedableRng, rngs::StdRng};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    compatibility::filter::filter_candidates,
    diet_chart::{
        entities::{
            DietChart, DietChartDetail, GenerationOutcome, GenerationReport, SkippedDay,
            SkippedRecipe,
        },
        generator::{dominant_meal_types, plan_day},
        ports::{DietChartPolicy, DietChartRepository, DietChartService},
        value_objects::{GenerateDietChartInput, UpdateChartStatusInput},
    },
    food::ports::FoodRepository,
    health::ports::HealthCheckRepository,
    patient::ports::{PatientPolicy, PatientRepository},
    recipe::{
        ports::{LLMClient, RecipeRepository},
        services::RecipeProvision,
    },
    specialist::ports::SwapLogRepository,
};

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
    fn planner_rng(&self) -> StdRng {
        match self.planner.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    async fn visible_chart(&self, identity: &Identity, chart_id: Uuid) -> Result<DietChart, CoreError> {
        let chart = self
            .diet_chart_repository
            .get_chart(chart_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_view_chart(identity.clone(), &chart).await,
            "insufficient permissions",
        )?;

        Ok(chart)
    }

    /// Recipes for every distinct food served in `detail`, each in the meal
    /// type it appears in most.
    async fn generate_chart_recipes(
        &self,
        creator: Uuid,
        detail: &DietChartDetail,
        report: &mut GenerationReport,
    ) {
        for (food_id, meal_type) in dominant_meal_types(&detail.meal_plans) {
            let food = match self.food_repository.get_by_id(food_id).await {
                Ok(Some(food)) => food,
                Ok(None) => {
                    report.skipped_recipes.push(SkippedRecipe {
                        food_id,
                        reason: "food not found".to_string(),
                    });
                    continue;
                }
                Err(e) => {
                    report.skipped_recipes.push(SkippedRecipe {
                        food_id,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            match self.provide_recipe(creator, &food, meal_type).await {
                Ok(RecipeProvision::Created(recipe)) => report.generated_recipes.push(recipe.id),
                Ok(RecipeProvision::Existing) => report.existing_recipes += 1,
                Err(e) => {
                    warn!("recipe for {} skipped: {}", food.name, e);
                    report.skipped_recipes.push(SkippedRecipe {
                        food_id,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }
}

impl<F, P, D, SL, RC, HC, LLM, TV> DietChartService for Service<F, P, D, SL, RC, HC, LLM, TV>
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
    #[instrument(skip(self, identity, input), fields(patient_id = %input.patient_id))]
    async fn generate_diet_chart(
        &self,
        identity: Identity,
        input: GenerateDietChartInput,
    ) -> Result<GenerationOutcome, CoreError> {
        let patient = self.visible_patient(&identity, input.patient_id).await?;
        ensure_policy(
            self.policy
                .can_manage_patient(identity.clone(), &patient)
                .await,
            "insufficient permissions",
        )?;

        let duration_days = input
            .duration_days
            .unwrap_or(self.planner.default_duration_days);
        if !(1..=self.planner.max_duration_days).contains(&duration_days) {
            return Err(CoreError::Invalid(format!(
                "duration_days must be between 1 and {}",
                self.planner.max_duration_days
            )));
        }

        let missing = patient.missing_generation_fields();
        if !missing.is_empty() {
            return Err(CoreError::MissingPatientData {
                name: patient.name.clone(),
                fields: missing,
            });
        }

        let catalog = self.food_repository.list_active().await?;
        if catalog.is_empty() {
            return Err(CoreError::EmptyFoodCatalog);
        }

        let candidates = filter_candidates(&catalog, &patient, None, &self.candidates)?;
        info!(
            "{} candidate foods for patient {} (fallback: {})",
            candidates.len(),
            patient.id,
            candidates.fallback_used
        );

        let daily_calories = patient.daily_calorie_target();
        let chart = self
            .diet_chart_repository
            .create_chart(DietChart::generated(&patient, duration_days))
            .await?;

        let mut rng = self.planner_rng();
        let mut report = GenerationReport::default();
        let mut saved_plans = Vec::new();

        for day in 1..=duration_days {
            let plans = plan_day(
                chart.id,
                day,
                daily_calories,
                &candidates.foods,
                &self.planner,
                &mut rng,
            );

            match self.diet_chart_repository.save_day(plans).await {
                Ok(plans) => {
                    report.succeeded_days.push(day);
                    saved_plans.extend(plans);
                }
                Err(e) => {
                    error!("day {} of chart {} skipped: {}", day, chart.id, e);
                    report.skipped_days.push(SkippedDay {
                        day,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let detail = DietChartDetail {
            chart: chart.clone(),
            meal_plans: saved_plans,
        };
        if self.planner.generate_recipes {
            self.generate_chart_recipes(identity.id(), &detail, &mut report)
                .await;
        }

        info!(
            "diet chart {} generated: {} days, {} skipped, {} recipes",
            chart.id,
            report.succeeded_days.len(),
            report.skipped_days.len(),
            report.generated_recipes.len()
        );

        Ok(GenerationOutcome {
            total_meals: duration_days * self.planner.slots.len() as i32,
            fallback_used: candidates.fallback_used,
            message: format!("Successfully generated {duration_days}-day diet chart with recipes"),
            chart,
            report,
        })
    }

    async fn get_diet_charts(
        &self,
        identity: Identity,
        patient_id: Uuid,
    ) -> Result<Vec<DietChart>, CoreError> {
        let patient = self.visible_patient(&identity, patient_id).await?;

        self.diet_chart_repository
            .list_charts_by_patient(patient.id)
            .await
    }

    async fn get_diet_chart(
        &self,
        identity: Identity,
        chart_id: Uuid,
    ) -> Result<DietChartDetail, CoreError> {
        let chart = self.visible_chart(&identity, chart_id).await?;
        let meal_plans = self.diet_chart_repository.get_meal_plans(chart.id).await?;

        Ok(DietChartDetail { chart, meal_plans })
    }

    #[instrument(skip(self, identity, input), fields(chart_id = %input.chart_id))]
    async fn update_chart_status(
        &self,
        identity: Identity,
        input: UpdateChartStatusInput,
    ) -> Result<DietChart, CoreError> {
        let mut chart = self.visible_chart(&identity, input.chart_id).await?;

        ensure_policy(
            self.policy.can_manage_chart(identity, &chart).await,
            "insufficient permissions",
        )?;

        chart.set_status(input.status)?;
        self.diet_chart_repository.update_chart(chart).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_utils::{practitioner, sample_food, sample_patient, test_service},
        compatibility::entities::{CandidateFallback, CandidatePolicy},
        diet_chart::entities::{ARCHITECT_MODEL, ChartStatus, MealType},
        food::entities::DoshaEffect,
        recipe::ports::RecipeService,
    };

    fn catalog() -> Vec<crate::domain::food::entities::Food> {
        ["Basmati Rice", "Millet", "Quinoa", "Oats", "Barley", "Mung Dal"]
            .iter()
            .map(|name| sample_food(name, "grains"))
            .collect()
    }

    fn input(patient_id: Uuid, days: Option<i32>) -> GenerateDietChartInput {
        GenerateDietChartInput {
            patient_id,
            duration_days: days,
        }
    }

    #[tokio::test]
    async fn a_week_has_twenty_eight_meal_plans() {
        let identity = practitioner();
        let patient = sample_patient(identity.id());
        let service = test_service()
            .with_foods(catalog())
            .with_patients(vec![patient.clone()]);

        let outcome = service
            .generate_diet_chart(identity.clone(), input(patient.id, Some(7)))
            .await
            .unwrap();

        assert_eq!(outcome.total_meals, 28);
        assert_eq!(outcome.report.succeeded_days, (1..=7).collect::<Vec<_>>());
        assert!(outcome.report.skipped_days.is_empty());
        assert!(!outcome.fallback_used);
        assert_eq!(outcome.chart.ai_model_used, ARCHITECT_MODEL);
        assert_eq!(outcome.chart.status, ChartStatus::Draft);
        assert_eq!(
            outcome.message,
            "Successfully generated 7-day diet chart with recipes"
        );

        let detail = service
            .get_diet_chart(identity, outcome.chart.id)
            .await
            .unwrap();
        assert_eq!(detail.meal_plans.len(), 28);

        let daily = patient.daily_calorie_target();
        for day in 1..=7 {
            let total: i32 = detail
                .meal_plans
                .iter()
                .filter(|plan| plan.day_number == day)
                .map(|plan| plan.target_calories)
                .sum();
            assert!(total <= daily && daily - total < 4);
        }
    }

    #[tokio::test]
    async fn one_day_at_2000_kcal_splits_by_meal() {
        let identity = practitioner();
        let mut patient = sample_patient(identity.id());
        patient.daily_calorie_needs = Some(2000);
        let service = test_service()
            .with_foods(catalog())
            .with_patients(vec![patient.clone()]);

        let outcome = service
            .generate_diet_chart(identity.clone(), input(patient.id, Some(1)))
            .await
            .unwrap();
        let detail = service
            .get_diet_chart(identity, outcome.chart.id)
            .await
            .unwrap();

        let mut targets: Vec<(MealType, i32)> = detail
            .meal_plans
            .iter()
            .map(|plan| (plan.meal_type, plan.target_calories))
            .collect();
        targets.sort();
        assert_eq!(
            targets,
            vec![
                (MealType::Breakfast, 500),
                (MealType::Lunch, 800),
                (MealType::Dinner, 600),
                (MealType::Snack, 100),
            ]
        );
    }

    #[tokio::test]
    async fn missing_measurements_are_reported_before_any_write() {
        let identity = practitioner();
        let mut patient = sample_patient(identity.id());
        patient.height = None;
        patient.age = None;
        let service = test_service()
            .with_foods(catalog())
            .with_patients(vec![patient.clone()]);

        let result = service
            .generate_diet_chart(identity.clone(), input(patient.id, None))
            .await;

        assert_eq!(
            result,
            Err(CoreError::MissingPatientData {
                name: patient.name.clone(),
                fields: vec!["height".to_string(), "age".to_string()],
            })
        );
        let charts = service.get_diet_charts(identity, patient.id).await.unwrap();
        assert!(charts.is_empty());
    }

    #[tokio::test]
    async fn empty_catalog_is_a_precondition_failure() {
        let identity = practitioner();
        let patient = sample_patient(identity.id());
        let service = test_service().with_patients(vec![patient.clone()]);

        let result = service
            .generate_diet_chart(identity, input(patient.id, None))
            .await;

        assert_eq!(result, Err(CoreError::EmptyFoodCatalog));
    }

    #[tokio::test]
    async fn incompatible_catalog_falls_back_and_says_so() {
        let identity = practitioner();
        let mut patient = sample_patient(identity.id());
        patient.food_dislikes = catalog().into_iter().map(|food| food.name).collect();
        let service = test_service()
            .with_foods(catalog())
            .with_patients(vec![patient.clone()]);

        let outcome = service
            .generate_diet_chart(identity, input(patient.id, Some(1)))
            .await
            .unwrap();

        assert!(outcome.fallback_used);
    }

    #[tokio::test]
    async fn only_constitution_safe_foods_are_served() {
        let identity = practitioner();
        let patient = sample_patient(identity.id());
        let mut foods = catalog();
        let mut chili = sample_food("Chili", "spices");
        chili.pitta_effect = DoshaEffect::Aggravates;
        foods.push(chili.clone());
        let service = test_service()
            .with_foods(foods)
            .with_patients(vec![patient.clone()]);

        let outcome = service
            .generate_diet_chart(identity.clone(), input(patient.id, Some(3)))
            .await
            .unwrap();
        let detail = service
            .get_diet_chart(identity, outcome.chart.id)
            .await
            .unwrap();

        assert!(
            detail
                .meal_plans
                .iter()
                .flat_map(|plan| plan.items.iter())
                .all(|item| item.food_id != chili.id)
        );
    }

    #[tokio::test]
    async fn recipes_are_generated_once_per_food() {
        let identity = practitioner();
        let patient = sample_patient(identity.id());
        let foods: Vec<_> = catalog().into_iter().take(3).collect();
        let service = test_service()
            .with_foods(foods.clone())
            .with_patients(vec![patient.clone()]);

        let first = service
            .generate_diet_chart(identity.clone(), input(patient.id, Some(2)))
            .await
            .unwrap();
        let second = service
            .generate_diet_chart(identity.clone(), input(patient.id, Some(2)))
            .await
            .unwrap();

        assert_eq!(first.report.generated_recipes.len(), 3);
        assert!(second.report.generated_recipes.is_empty());
        assert_eq!(second.report.existing_recipes, 3);
        for food in &foods {
            let recipes = service
                .get_recipes(identity.clone(), food.id)
                .await
                .unwrap();
            assert_eq!(recipes.len(), 1);
        }
    }

    #[tokio::test]
    async fn failed_days_are_skipped_not_fatal() {
        let identity = practitioner();
        let patient = sample_patient(identity.id());
        let service = test_service()
            .with_foods(catalog())
            .with_patients(vec![patient.clone()])
            .with_failing_day(2);

        let outcome = service
            .generate_diet_chart(identity, input(patient.id, Some(3)))
            .await
            .unwrap();

        assert_eq!(outcome.report.succeeded_days, vec![1, 3]);
        assert_eq!(outcome.report.skipped_days.len(), 1);
        assert_eq!(outcome.report.skipped_days[0].day, 2);
        assert_eq!(outcome.total_meals, 12);
    }

    #[tokio::test]
    async fn duration_is_bounded() {
        let identity = practitioner();
        let patient = sample_patient(identity.id());
        let service = test_service()
            .with_foods(catalog())
            .with_patients(vec![patient.clone()]);

        for days in [0, 91] {
            let result = service
                .generate_diet_chart(identity.clone(), input(patient.id, Some(days)))
                .await;
            assert!(matches!(result, Err(CoreError::Invalid(_))));
        }
    }

    #[tokio::test]
    async fn archived_charts_are_frozen() {
        let identity = practitioner();
        let patient = sample_patient(identity.id());
        let service = test_service()
            .with_foods(catalog())
            .with_patients(vec![patient.clone()]);
        let outcome = service
            .generate_diet_chart(identity.clone(), input(patient.id, Some(1)))
            .await
            .unwrap();

        let archived = service
            .update_chart_status(
                identity.clone(),
                UpdateChartStatusInput {
                    chart_id: outcome.chart.id,
                    status: ChartStatus::Archived,
                },
            )
            .await
            .unwrap();
        assert_eq!(archived.status, ChartStatus::Archived);

        let reopened = service
            .update_chart_status(
                identity,
                UpdateChartStatusInput {
                    chart_id: outcome.chart.id,
                    status: ChartStatus::Active,
                },
            )
            .await;
        assert!(matches!(reopened, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn charts_are_private_to_their_practitioner() {
        let identity = practitioner();
        let patient = sample_patient(identity.id());
        let service = test_service()
            .with_foods(catalog())
            .with_patients(vec![patient.clone()]);
        let outcome = service
            .generate_diet_chart(identity, input(patient.id, Some(1)))
            .await
            .unwrap();

        let result = service.get_diet_chart(practitioner(), outcome.chart.id).await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn strict_candidates_fail_without_writing_a_chart() {
        let identity = practitioner();
        let mut patient = sample_patient(identity.id());
        patient.food_dislikes = catalog().into_iter().map(|food| food.name).collect();
        let service = test_service()
            .with_foods(catalog())
            .with_patients(vec![patient.clone()])
            .with_candidates(CandidatePolicy {
                fallback: CandidateFallback::Reject,
                ..CandidatePolicy::default()
            });

        let result = service
            .generate_diet_chart(identity.clone(), input(patient.id, Some(1)))
            .await;
        assert_eq!(result, Err(CoreError::NoCompatibleFoods));

        let charts = service.get_diet_charts(identity, patient.id).await.unwrap();
        assert!(charts.is_empty());
    }

    #[tokio::test]
    async fn chart_storage_failure_aborts_generation() {
        let identity = practitioner();
        let patient = sample_patient(identity.id());
        let service = test_service()
            .with_foods(catalog())
            .with_patients(vec![patient.clone()])
            .with_failing_chart_insert();

        let result = service
            .generate_diet_chart(identity.clone(), input(patient.id, Some(1)))
            .await;
        assert_eq!(result, Err(CoreError::InternalServerError));

        let charts = service.get_diet_charts(identity, patient.id).await.unwrap();
        assert!(charts.is_empty());
    }
}
