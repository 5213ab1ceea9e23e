use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    diet_chart::ports::DietChartRepository,
    food::{
        entities::Food,
        import::{FoodImportReport, ImportSkip, parse_food_csv},
        ports::{FoodPolicy, FoodRepository, FoodService},
        value_objects::{CreateFoodInput, GetFoodsFilter, UpdateFoodInput},
    },
    health::ports::HealthCheckRepository,
    patient::ports::PatientRepository,
    recipe::ports::{LLMClient, RecipeRepository},
    specialist::ports::SwapLogRepository,
};

fn validate_nutrients(food: &Food) -> Result<(), CoreError> {
    let values = [food.protein, food.carbohydrates, food.fat, food.fiber];
    if food.calories < 0 || values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(CoreError::Invalid(
            "nutrient values must be non-negative".to_string(),
        ));
    }
    Ok(())
}

impl<F, P, D, SL, RC, HC, LLM, TV> FoodService for Service<F, P, D, SL, RC, HC, LLM, TV>
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
    async fn get_foods(
        &self,
        _identity: Identity,
        filter: GetFoodsFilter,
    ) -> Result<Vec<Food>, CoreError> {
        self.food_repository.fetch_foods(filter).await
    }

    async fn get_food(&self, _identity: Identity, food_id: Uuid) -> Result<Food, CoreError> {
        self.food_repository
            .get_by_id(food_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, identity, input), fields(name = %input.name))]
    async fn create_food(
        &self,
        identity: Identity,
        input: CreateFoodInput,
    ) -> Result<Food, CoreError> {
        ensure_policy(
            self.policy.can_manage_foods(identity).await,
            "insufficient permissions",
        )?;

        if self
            .food_repository
            .get_by_name(input.name.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict);
        }

        let food = Food::new(input.into());
        validate_nutrients(&food)?;

        let created = self.food_repository.create_food(food).await?;
        info!("food {} added to catalog", created.name);

        Ok(created)
    }

    #[instrument(skip(self, identity, input), fields(food_id = %input.food_id))]
    async fn update_food(
        &self,
        identity: Identity,
        input: UpdateFoodInput,
    ) -> Result<Food, CoreError> {
        ensure_policy(
            self.policy.can_manage_foods(identity).await,
            "insufficient permissions",
        )?;

        let mut food = self
            .food_repository
            .get_by_id(input.food_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(name) = &input.name
            && name != &food.name
            && self.food_repository.get_by_name(name.clone()).await?.is_some()
        {
            return Err(CoreError::Conflict);
        }

        food.update(input);
        validate_nutrients(&food)?;

        self.food_repository.update_food(food).await
    }

    #[instrument(skip(self, identity, csv), fields(bytes = csv.len()))]
    async fn import_foods(
        &self,
        identity: Identity,
        csv: String,
    ) -> Result<FoodImportReport, CoreError> {
        ensure_policy(
            self.policy.can_manage_foods(identity).await,
            "insufficient permissions",
        )?;

        let (rows, skipped) = parse_food_csv(&csv);
        let mut report = FoodImportReport {
            skipped,
            ..Default::default()
        };

        for (row, config) in rows {
            let mut food = Food::new(config);
            let written = match validate_nutrients(&food) {
                Err(e) => Err(e),
                Ok(()) => match self.food_repository.get_by_name(food.name.clone()).await? {
                    Some(existing) => {
                        food.id = existing.id;
                        food.created_at = existing.created_at;
                        food.is_active = existing.is_active;
                        self.food_repository.update_food(food).await.map(|_| false)
                    }
                    None => self.food_repository.create_food(food).await.map(|_| true),
                },
            };

            match written {
                Ok(true) => report.created += 1,
                Ok(false) => report.updated += 1,
                Err(e @ (CoreError::Invalid(_) | CoreError::Conflict)) => {
                    report.skipped.push(ImportSkip {
                        row,
                        reason: e.to_string(),
                    })
                }
                Err(e) => return Err(e),
            }
        }

        report.skipped.sort_by_key(|skip| skip.row);
        if !report.skipped.is_empty() {
            warn!("{} food rows skipped during import", report.skipped.len());
        }
        info!(
            "food import finished: {} created, {} updated",
            report.created, report.updated
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_utils::{admin, create_food_input, practitioner, sample_food, test_service},
        food::import::SAMPLE_FOOD_CSV,
    };

    #[tokio::test]
    async fn create_food_requires_admin_role() {
        let service = test_service();
        let input = create_food_input(&sample_food("Mung Dal", "legumes"));

        let result = service.create_food(practitioner(), input).await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn create_food_rejects_duplicate_names() {
        let service = test_service().with_foods(vec![sample_food("Ghee", "dairy")]);
        let input = create_food_input(&sample_food("Ghee", "dairy"));

        let result = service.create_food(admin(), input).await;

        assert_eq!(result.unwrap_err(), CoreError::Conflict);
    }

    #[tokio::test]
    async fn update_food_applies_partial_changes() {
        let ghee = sample_food("Ghee", "dairy");
        let service = test_service().with_foods(vec![ghee.clone()]);

        let updated = service
            .update_food(
                admin(),
                UpdateFoodInput {
                    food_id: ghee.id,
                    calories: Some(900),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.calories, 900);
        assert_eq!(updated.name, "Ghee");
    }

    #[tokio::test]
    async fn update_food_rejects_negative_nutrients() {
        let ghee = sample_food("Ghee", "dairy");
        let service = test_service().with_foods(vec![ghee.clone()]);

        let result = service
            .update_food(
                admin(),
                UpdateFoodInput {
                    food_id: ghee.id,
                    fat: Some(-1.0),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn import_requires_admin_role() {
        let service = test_service();

        let result = service
            .import_foods(practitioner(), SAMPLE_FOOD_CSV.to_string())
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn import_upserts_by_name_and_reports_skips() {
        let mut ghee = sample_food("Ghee", "dairy");
        ghee.calories = 850;
        ghee.is_active = false;
        let service = test_service().with_foods(vec![ghee.clone()]);
        let csv = "\
name,category,calories,protein,fat,primary_taste,energy,is_vegan
Ghee,dairy,900,0,100,sweet,heating,false
Millet,grains,119,3.5,1.0,sweet,heating,true
Barley,grains,-5,2,1,sweet,cooling,true
Oats,grains,389,16.9,6.9,umami,heating,true
";

        let report = service
            .import_foods(admin(), csv.to_string())
            .await
            .unwrap();

        assert_eq!(report.created, 1);
        assert_eq!(report.updated, 1);
        let rows: Vec<usize> = report.skipped.iter().map(|s| s.row).collect();
        assert_eq!(rows, vec![4, 5]);
        assert!(report.skipped[0].reason.contains("non-negative"));

        let updated = service.food_repository.food(ghee.id).unwrap();
        assert_eq!(updated.calories, 900);
        assert!(!updated.dietary.is_vegan);
        assert!(!updated.is_active);
        assert_eq!(updated.created_at, ghee.created_at);

        let names: Vec<String> = service
            .food_repository
            .foods()
            .into_iter()
            .map(|food| food.name)
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Millet".to_string()));
    }

    #[tokio::test]
    async fn importing_the_same_file_twice_only_updates() {
        let service = test_service();

        let first = service
            .import_foods(admin(), SAMPLE_FOOD_CSV.to_string())
            .await
            .unwrap();
        let second = service
            .import_foods(admin(), SAMPLE_FOOD_CSV.to_string())
            .await
            .unwrap();

        assert_eq!(first.created, 8);
        assert_eq!(second.created, 0);
        assert_eq!(second.updated, 8);
        assert_eq!(service.food_repository.foods().len(), 8);
    }
}
