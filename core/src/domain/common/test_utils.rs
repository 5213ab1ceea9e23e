use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use crate::domain::{
    authentication::{entities::JwtClaim, ports::TokenVerifier, value_objects::Identity},
    common::{entities::app_errors::CoreError, policies::AahaaraPolicy, services::Service},
    diet_chart::{
        entities::{ChartCounts, ChartStatus, DietChart, MealItem, MealPlan},
        ports::{DietChartRepository, DietChartService},
        value_objects::GenerateDietChartInput,
    },
    food::{
        entities::{
            AllergenFlags, DietaryFlags, DoshaEffect, Energy, Food, FoodConfig, Taste,
        },
        ports::FoodRepository,
        policies::CATALOG_ADMIN_ROLE,
        value_objects::{CreateFoodInput, GetFoodsFilter},
    },
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    patient::{
        entities::{ActivityLevel, Constitution, Gender, Patient, PatientConfig},
        ports::PatientRepository,
        value_objects::{CreatePatientInput, GetPatientsFilter},
    },
    recipe::{
        entities::Recipe,
        ports::{LLMClient, RecipeRepository},
    },
    specialist::{
        entities::FoodSwapLog, ports::SwapLogRepository, value_objects::GetSwapLogsFilter,
    },
};

#[derive(Default)]
pub(crate) struct Store {
    foods: Vec<Food>,
    patients: Vec<Patient>,
    charts: Vec<DietChart>,
    plans: Vec<MealPlan>,
    items: Vec<MealItem>,
    swap_logs: Vec<FoodSwapLog>,
    recipes: Vec<Recipe>,
    failing_day: Option<i32>,
    failing_chart_insert: bool,
}

#[derive(Clone, Default)]
pub(crate) struct SharedStore(Arc<Mutex<Store>>);

impl SharedStore {
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.0.lock().unwrap()
    }
}

fn page<T>(items: Vec<T>, offset: Option<u32>, limit: Option<u32>) -> Vec<T> {
    items
        .into_iter()
        .skip(offset.unwrap_or(0) as usize)
        .take(limit.map(|l| l as usize).unwrap_or(usize::MAX))
        .collect()
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryFoodRepository(SharedStore);

impl InMemoryFoodRepository {
    pub fn food(&self, food_id: Uuid) -> Option<Food> {
        self.0.lock().foods.iter().find(|f| f.id == food_id).cloned()
    }

    pub fn foods(&self) -> Vec<Food> {
        self.0.lock().foods.clone()
    }
}

impl FoodRepository for InMemoryFoodRepository {
    async fn fetch_foods(&self, filter: GetFoodsFilter) -> Result<Vec<Food>, CoreError> {
        let foods: Vec<Food> = self
            .0
            .lock()
            .foods
            .iter()
            .filter(|f| filter.include_inactive || f.is_active)
            .filter(|f| filter.category.as_ref().is_none_or(|c| &f.category == c))
            .filter(|f| {
                filter
                    .name_like
                    .as_ref()
                    .is_none_or(|n| f.name.to_lowercase().contains(&n.to_lowercase()))
            })
            .cloned()
            .collect();
        Ok(page(foods, filter.offset, filter.limit))
    }

    async fn list_active(&self) -> Result<Vec<Food>, CoreError> {
        Ok(self.0.lock().foods.iter().filter(|f| f.is_active).cloned().collect())
    }

    async fn list_active_in_category(
        &self,
        category: String,
        exclude_id: Uuid,
    ) -> Result<Vec<Food>, CoreError> {
        Ok(self
            .0
            .lock()
            .foods
            .iter()
            .filter(|f| f.is_active && f.category == category && f.id != exclude_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, food_id: Uuid) -> Result<Option<Food>, CoreError> {
        Ok(self.food(food_id))
    }

    async fn get_by_ids(&self, food_ids: Vec<Uuid>) -> Result<Vec<Food>, CoreError> {
        Ok(self
            .0
            .lock()
            .foods
            .iter()
            .filter(|f| food_ids.contains(&f.id))
            .cloned()
            .collect())
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Food>, CoreError> {
        Ok(self.0.lock().foods.iter().find(|f| f.name == name).cloned())
    }

    async fn create_food(&self, food: Food) -> Result<Food, CoreError> {
        let mut store = self.0.lock();
        if store.foods.iter().any(|f| f.name == food.name) {
            return Err(CoreError::Conflict);
        }
        store.foods.push(food.clone());
        Ok(food)
    }

    async fn update_food(&self, food: Food) -> Result<Food, CoreError> {
        let mut store = self.0.lock();
        if store.foods.iter().any(|f| f.name == food.name && f.id != food.id) {
            return Err(CoreError::Conflict);
        }
        let slot = store
            .foods
            .iter_mut()
            .find(|f| f.id == food.id)
            .ok_or(CoreError::NotFound)?;
        *slot = food.clone();
        Ok(food)
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryPatientRepository(SharedStore);

impl PatientRepository for InMemoryPatientRepository {
    async fn fetch_patients_by_practitioner(
        &self,
        practitioner_id: Uuid,
        filter: GetPatientsFilter,
    ) -> Result<Vec<Patient>, CoreError> {
        let patients: Vec<Patient> = self
            .0
            .lock()
            .patients
            .iter()
            .filter(|p| p.practitioner_id == practitioner_id)
            .filter(|p| filter.include_inactive || p.is_active)
            .cloned()
            .collect();
        Ok(page(patients, filter.offset, filter.limit))
    }

    async fn get_by_id(&self, patient_id: Uuid) -> Result<Option<Patient>, CoreError> {
        Ok(self.0.lock().patients.iter().find(|p| p.id == patient_id).cloned())
    }

    async fn count_by_practitioner(&self, practitioner_id: Uuid) -> Result<u64, CoreError> {
        Ok(self
            .0
            .lock()
            .patients
            .iter()
            .filter(|p| p.practitioner_id == practitioner_id)
            .count() as u64)
    }

    async fn create_patient(&self, patient: Patient) -> Result<Patient, CoreError> {
        self.0.lock().patients.push(patient.clone());
        Ok(patient)
    }

    async fn update_patient(&self, patient: Patient) -> Result<Patient, CoreError> {
        let mut store = self.0.lock();
        let slot = store
            .patients
            .iter_mut()
            .find(|p| p.id == patient.id)
            .ok_or(CoreError::NotFound)?;
        *slot = patient.clone();
        Ok(patient)
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryDietChartRepository(SharedStore);

impl DietChartRepository for InMemoryDietChartRepository {
    async fn create_chart(&self, chart: DietChart) -> Result<DietChart, CoreError> {
        let mut store = self.0.lock();
        if store.failing_chart_insert {
            return Err(CoreError::InternalServerError);
        }
        store.charts.push(chart.clone());
        Ok(chart)
    }

    async fn save_day(&self, plans: Vec<MealPlan>) -> Result<Vec<MealPlan>, CoreError> {
        let mut store = self.0.lock();
        if let Some(day) = plans.first().map(|p| p.day_number)
            && store.failing_day == Some(day)
        {
            return Err(CoreError::InternalServerError);
        }
        for plan in &plans {
            store.items.extend(plan.items.iter().cloned());
            let mut bare = plan.clone();
            bare.items.clear();
            store.plans.push(bare);
        }
        Ok(plans)
    }

    async fn get_chart(&self, chart_id: Uuid) -> Result<Option<DietChart>, CoreError> {
        Ok(self.0.lock().charts.iter().find(|c| c.id == chart_id).cloned())
    }

    async fn list_charts_by_patient(&self, patient_id: Uuid) -> Result<Vec<DietChart>, CoreError> {
        Ok(self
            .0
            .lock()
            .charts
            .iter()
            .filter(|c| c.patient_id == patient_id)
            .cloned()
            .collect())
    }

    async fn get_meal_plans(&self, chart_id: Uuid) -> Result<Vec<MealPlan>, CoreError> {
        let store = self.0.lock();
        let mut plans: Vec<MealPlan> = store
            .plans
            .iter()
            .filter(|p| p.diet_chart_id == chart_id)
            .cloned()
            .map(|mut plan| {
                plan.items = store
                    .items
                    .iter()
                    .filter(|i| i.meal_plan_id == plan.id && i.is_current)
                    .cloned()
                    .collect();
                plan
            })
            .collect();
        plans.sort_by_key(|p| (p.day_number, p.meal_type));
        Ok(plans)
    }

    async fn get_meal_plan(&self, meal_plan_id: Uuid) -> Result<Option<MealPlan>, CoreError> {
        Ok(self.0.lock().plans.iter().find(|p| p.id == meal_plan_id).cloned())
    }

    async fn get_meal_item(&self, item_id: Uuid) -> Result<Option<MealItem>, CoreError> {
        Ok(self.0.lock().items.iter().find(|i| i.id == item_id).cloned())
    }

    async fn list_recent_charts(
        &self,
        practitioner_id: Uuid,
        limit: u64,
    ) -> Result<Vec<DietChart>, CoreError> {
        let mut charts: Vec<DietChart> = self
            .0
            .lock()
            .charts
            .iter()
            .filter(|c| c.practitioner_id == practitioner_id)
            .cloned()
            .collect();
        charts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        charts.truncate(limit as usize);
        Ok(charts)
    }

    async fn count_charts_by_practitioner(
        &self,
        practitioner_id: Uuid,
    ) -> Result<ChartCounts, CoreError> {
        let store = self.0.lock();
        let owned = store
            .charts
            .iter()
            .filter(|c| c.practitioner_id == practitioner_id);
        Ok(ChartCounts {
            total: owned.clone().count() as u64,
            active: owned.filter(|c| c.status == ChartStatus::Active).count() as u64,
        })
    }

    async fn update_chart(&self, chart: DietChart) -> Result<DietChart, CoreError> {
        let mut store = self.0.lock();
        let slot = store
            .charts
            .iter_mut()
            .find(|c| c.id == chart.id)
            .ok_or(CoreError::NotFound)?;
        *slot = chart.clone();
        Ok(chart)
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemorySwapLogRepository(SharedStore);

impl SwapLogRepository for InMemorySwapLogRepository {
    async fn record_swap(
        &self,
        previous_item_id: Uuid,
        replacement: MealItem,
        log: FoodSwapLog,
    ) -> Result<(MealItem, FoodSwapLog), CoreError> {
        let mut store = self.0.lock();
        let previous = store
            .items
            .iter_mut()
            .find(|i| i.id == previous_item_id)
            .ok_or(CoreError::NotFound)?;
        if !previous.is_current {
            return Err(CoreError::Conflict);
        }
        previous.is_current = false;
        store.items.push(replacement.clone());
        store.swap_logs.push(log.clone());
        Ok((replacement, log))
    }

    async fn fetch_logs_by_practitioner(
        &self,
        practitioner_id: Uuid,
        filter: GetSwapLogsFilter,
    ) -> Result<Vec<FoodSwapLog>, CoreError> {
        let logs: Vec<FoodSwapLog> = self
            .0
            .lock()
            .swap_logs
            .iter()
            .filter(|l| l.practitioner_id == practitioner_id)
            .filter(|l| filter.meal_item_id.is_none_or(|id| l.meal_item_id == id))
            .rev()
            .cloned()
            .collect();
        Ok(page(logs, filter.offset, filter.limit))
    }

    async fn count_by_practitioner(&self, practitioner_id: Uuid) -> Result<u64, CoreError> {
        Ok(self
            .0
            .lock()
            .swap_logs
            .iter()
            .filter(|l| l.practitioner_id == practitioner_id)
            .count() as u64)
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryRecipeRepository(SharedStore);

impl RecipeRepository for InMemoryRecipeRepository {
    async fn fetch_recipes_by_food(&self, food_id: Uuid) -> Result<Vec<Recipe>, CoreError> {
        Ok(self
            .0
            .lock()
            .recipes
            .iter()
            .filter(|r| r.food_id == food_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        Ok(self
            .0
            .lock()
            .recipes
            .iter()
            .find(|r| r.id == recipe_id)
            .cloned())
    }

    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let mut store = self.0.lock();
        if store
            .recipes
            .iter()
            .any(|r| r.food_id == recipe.food_id && r.name == recipe.name)
        {
            return Err(CoreError::Conflict);
        }
        store.recipes.push(recipe.clone());
        Ok(recipe)
    }
}

#[derive(Clone, Default)]
pub(crate) struct HealthyStore;

impl HealthCheckRepository for HealthyStore {
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            is_healthy: true,
            response_time_ms: 1,
            details: "in-memory".to_string(),
        })
    }

    async fn health(&self) -> Result<u64, CoreError> {
        Ok(1)
    }
}

#[derive(Clone, Default)]
pub(crate) struct CannedLLMClient {
    response: Option<String>,
}

impl LLMClient for CannedLLMClient {
    async fn generate_with_text(
        &self,
        _prompt: String,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.response
            .clone()
            .ok_or_else(|| CoreError::ExternalServiceError("no canned response".to_string()))
    }

    fn model_name(&self) -> String {
        "canned-model".to_string()
    }
}

#[derive(Clone, Default)]
pub(crate) struct StaticTokenVerifier {
    claims: Option<JwtClaim>,
}

impl TokenVerifier for StaticTokenVerifier {
    fn verify(&self, _token: &str) -> Result<JwtClaim, CoreError> {
        self.claims.clone().ok_or(CoreError::InvalidToken)
    }
}

pub(crate) type TestService = Service<
    InMemoryFoodRepository,
    InMemoryPatientRepository,
    InMemoryDietChartRepository,
    InMemorySwapLogRepository,
    InMemoryRecipeRepository,
    HealthyStore,
    CannedLLMClient,
    StaticTokenVerifier,
>;

pub(crate) fn test_service() -> TestService {
    let store = SharedStore::default();

    Service::new(
        InMemoryFoodRepository(store.clone()),
        InMemoryPatientRepository(store.clone()),
        InMemoryDietChartRepository(store.clone()),
        InMemorySwapLogRepository(store.clone()),
        InMemoryRecipeRepository(store),
        HealthyStore,
        CannedLLMClient::default(),
        StaticTokenVerifier::default(),
        AahaaraPolicy::new(),
    )
}

impl TestService {
    pub fn with_foods(self, foods: Vec<Food>) -> Self {
        self.food_repository.0.lock().foods.extend(foods);
        self
    }

    pub fn with_patients(self, patients: Vec<Patient>) -> Self {
        self.patient_repository.0.lock().patients.extend(patients);
        self
    }

    pub fn with_recipes(self, recipes: Vec<Recipe>) -> Self {
        self.recipe_repository.0.lock().recipes.extend(recipes);
        self
    }

    pub fn with_failing_day(self, day: i32) -> Self {
        self.diet_chart_repository.0.lock().failing_day = Some(day);
        self
    }

    pub fn with_failing_chart_insert(self) -> Self {
        self.diet_chart_repository.0.lock().failing_chart_insert = true;
        self
    }

    pub fn with_token(mut self, claims: JwtClaim) -> Self {
        self.token_verifier = StaticTokenVerifier {
            claims: Some(claims),
        };
        self
    }

    pub fn with_llm_response(mut self, response: String) -> Self {
        self.llm_client = CannedLLMClient {
            response: Some(response),
        };
        self
    }
}

/// A service holding one patient of `identity` with a generated two-day chart.
pub(crate) async fn seeded_chart(identity: &Identity) -> (TestService, Uuid) {
    let patient = sample_patient(identity.id());
    let foods = ["Basmati Rice", "Millet", "Quinoa", "Oats", "Barley"]
        .iter()
        .map(|name| sample_food(name, "grains"))
        .collect();
    let service = test_service()
        .with_foods(foods)
        .with_patients(vec![patient.clone()]);

    let outcome = service
        .generate_diet_chart(
            identity.clone(),
            GenerateDietChartInput {
                patient_id: patient.id,
                duration_days: Some(2),
            },
        )
        .await
        .unwrap();

    (service, outcome.chart.id)
}

/// Sweet, neutral energy, soothing to Vata and Pitta, neutral for Kapha.
pub(crate) fn sample_food(name: &str, category: &str) -> Food {
    Food::new(FoodConfig {
        name: name.to_string(),
        category: category.to_string(),
        subcategory: None,
        calories: 120,
        protein: 4.0,
        carbohydrates: 22.0,
        fat: 1.5,
        fiber: 2.0,
        primary_taste: Taste::Sweet,
        secondary_taste: None,
        energy: Energy::Neutral,
        vata_effect: DoshaEffect::Pacifies,
        pitta_effect: DoshaEffect::Pacifies,
        kapha_effect: DoshaEffect::Neutral,
        dietary: DietaryFlags::default(),
        allergens: AllergenFlags::default(),
    })
}

/// A Pitta patient with full measurements and no restrictions.
pub(crate) fn sample_patient(practitioner_id: Uuid) -> Patient {
    Patient::new(PatientConfig {
        practitioner_id,
        name: "Asha Rao".to_string(),
        constitution: Constitution::Pitta,
        age: Some(30),
        height: Some(170.0),
        weight: Some(70.0),
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        allergies: vec![],
        dietary_preferences: vec![],
        food_dislikes: vec![],
        medical_conditions: vec![],
        primary_goal: None,
        target_weight: None,
    })
}

pub(crate) fn create_food_input(food: &Food) -> CreateFoodInput {
    CreateFoodInput {
        name: food.name.clone(),
        category: food.category.clone(),
        subcategory: food.subcategory.clone(),
        calories: food.calories,
        protein: food.protein,
        carbohydrates: food.carbohydrates,
        fat: food.fat,
        fiber: food.fiber,
        primary_taste: food.primary_taste,
        secondary_taste: food.secondary_taste,
        energy: food.energy,
        vata_effect: food.vata_effect,
        pitta_effect: food.pitta_effect,
        kapha_effect: food.kapha_effect,
        dietary: food.dietary,
        allergens: food.allergens,
    }
}

pub(crate) fn create_patient_input() -> CreatePatientInput {
    CreatePatientInput {
        name: "Ravi Menon".to_string(),
        constitution: Constitution::VataKapha,
        age: Some(42),
        height: Some(165.0),
        weight: Some(62.0),
        gender: Gender::Female,
        activity_level: ActivityLevel::Light,
        allergies: vec!["peanuts".to_string()],
        dietary_preferences: vec!["vegetarian".to_string()],
        food_dislikes: vec![],
        medical_conditions: vec![],
        primary_goal: Some("weight_maintenance".to_string()),
        target_weight: None,
    }
}

pub(crate) fn practitioner() -> Identity {
    Identity::new(Uuid::new_v4(), "vaidya".to_string(), vec![])
}

pub(crate) fn admin() -> Identity {
    Identity::new(
        Uuid::new_v4(),
        "catalog-admin".to_string(),
        vec![CATALOG_ADMIN_ROLE.to_string()],
    )
}
