use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    diet_chart::{
        entities::MealType,
        ports::{DietChartRepository, DietChartService},
    },
    food::{entities::Food, ports::FoodRepository},
    health::ports::HealthCheckRepository,
    patient::ports::PatientRepository,
    recipe::{
        entities::{FoodRecipes, GeneratedRecipe, RECIPE_CHAT_CONFIDENCE, Recipe, RecipeSuggestion},
        ports::{LLMClient, RecipeRepository, RecipeService},
        schema::get_recipe_schema,
        templates::{compose_recipe, recipe_name, youtube_search_url},
        value_objects::{GenerateRecipeInput, RecipeChatInput},
    },
    specialist::ports::SwapLogRepository,
};

const DEFAULT_CHAT_REQUEST: &str = "Create a healthy and delicious recipe";

/// Result of asking for a rule-based recipe when one may already exist.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeProvision {
    Created(Recipe),
    Existing,
}

fn recipe_prompt(food: &Food, request: &str) -> String {
    format!(
        "You are a professional chef and Ayurvedic cooking expert. Create a detailed cooking recipe for {name}.\n\
         \n\
         Food information:\n\
         - Name: {name}\n\
         - Category: {category}\n\
         - Calories per 100g: {calories}\n\
         - Protein: {protein}g\n\
         - Carbohydrates: {carbs}g\n\
         - Fat: {fat}g\n\
         - Primary taste: {taste}\n\
         - Energy: {energy}\n\
         - Vata effect: {vata}\n\
         - Pitta effect: {pitta}\n\
         - Kapha effect: {kapha}\n\
         \n\
         User request: {request}\n\
         \n\
         Give exact ingredient quantities, step-by-step instructions, total cooking time, \
         difficulty, servings, estimated nutrition per serving, Ayurvedic benefits with dosha \
         considerations, the best time to consume it, cooking tips, storage instructions and a \
         YouTube search query for a matching cooking video. Keep the recipe practical and rooted \
         in traditional cooking methods.",
        name = food.name,
        category = food.category,
        calories = food.calories,
        protein = food.protein,
        carbs = food.carbohydrates,
        fat = food.fat,
        taste = food.primary_taste,
        energy = food.energy,
        vata = food.vata_effect,
        pitta = food.pitta_effect,
        kapha = food.kapha_effect,
    )
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
    /// Creates the rule-based recipe for `food` unless the practitioner
    /// already has a recipe for it or the template recipe exists.
    pub(crate) async fn provide_recipe(
        &self,
        creator: Uuid,
        food: &Food,
        meal_type: MealType,
    ) -> Result<RecipeProvision, CoreError> {
        let existing = self.recipe_repository.fetch_recipes_by_food(food.id).await?;
        let template_name = recipe_name(food);

        if existing
            .iter()
            .any(|recipe| recipe.created_by == creator || recipe.name == template_name)
        {
            return Ok(RecipeProvision::Existing);
        }

        let recipe = compose_recipe(food, meal_type, creator);
        let recipe = self.recipe_repository.create_recipe(recipe).await?;
        info!("recipe {} generated for {}", recipe.id, food.name);

        Ok(RecipeProvision::Created(recipe))
    }

    async fn active_food(&self, food_id: Uuid) -> Result<Food, CoreError> {
        self.food_repository
            .get_by_id(food_id)
            .await?
            .filter(|food| food.is_active)
            .ok_or(CoreError::NotFound)
    }
}

impl<F, P, D, SL, RC, HC, LLM, TV> RecipeService for Service<F, P, D, SL, RC, HC, LLM, TV>
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
    async fn get_recipes(&self, identity: Identity, food_id: Uuid) -> Result<Vec<Recipe>, CoreError> {
        self.food_repository
            .get_by_id(food_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let recipes = self.recipe_repository.fetch_recipes_by_food(food_id).await?;

        Ok(recipes
            .into_iter()
            .filter(|recipe| recipe.visible_to(identity.id()))
            .collect())
    }

    async fn get_recipe(&self, identity: Identity, recipe_id: Uuid) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .get_by_id(recipe_id)
            .await?
            .filter(|recipe| recipe.visible_to(identity.id()))
            .ok_or(CoreError::NotFound)
    }

    async fn get_chart_recipes(
        &self,
        identity: Identity,
        chart_id: Uuid,
    ) -> Result<Vec<FoodRecipes>, CoreError> {
        let detail = self.get_diet_chart(identity.clone(), chart_id).await?;

        let mut food_ids: Vec<Uuid> = Vec::new();
        for item in detail.meal_plans.iter().flat_map(|plan| plan.items.iter()) {
            if !food_ids.contains(&item.food_id) {
                food_ids.push(item.food_id);
            }
        }

        let foods = self.food_repository.get_by_ids(food_ids.clone()).await?;
        let mut grouped = Vec::with_capacity(food_ids.len());

        for food_id in food_ids {
            let Some(food) = foods.iter().find(|food| food.id == food_id) else {
                continue;
            };
            let mut recipes: Vec<Recipe> = self
                .recipe_repository
                .fetch_recipes_by_food(food_id)
                .await?
                .into_iter()
                .filter(|recipe| recipe.visible_to(identity.id()))
                .collect();
            recipes.sort_by(|a, b| a.name.cmp(&b.name));

            grouped.push(FoodRecipes {
                food_id,
                food_name: food.name.clone(),
                recipes,
            });
        }

        Ok(grouped)
    }

    #[instrument(skip(self, identity, input), fields(food_id = %input.food_id))]
    async fn generate_recipe(
        &self,
        identity: Identity,
        input: GenerateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        let food = self.active_food(input.food_id).await?;
        let meal_type = input.meal_type.unwrap_or(MealType::Lunch);

        match self.provide_recipe(identity.id(), &food, meal_type).await? {
            RecipeProvision::Created(recipe) => Ok(recipe),
            RecipeProvision::Existing => Err(CoreError::Conflict),
        }
    }

    #[instrument(skip(self, identity, input), fields(food_id = %input.food_id))]
    async fn recipe_chat(
        &self,
        identity: Identity,
        input: RecipeChatInput,
    ) -> Result<RecipeSuggestion, CoreError> {
        let food = self.active_food(input.food_id).await?;
        let request = input
            .request
            .as_deref()
            .map(str::trim)
            .filter(|request| !request.is_empty())
            .unwrap_or(DEFAULT_CHAT_REQUEST);

        let raw_response = self
            .llm_client
            .generate_with_text(recipe_prompt(&food, request), get_recipe_schema())
            .await?;

        let generated: GeneratedRecipe = serde_json::from_str(&raw_response).map_err(|e| {
            error!("Failed to parse LLM recipe response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        let youtube_search = generated
            .youtube_search
            .filter(|search| !search.trim().is_empty())
            .unwrap_or_else(|| format!("{} recipe cooking tutorial", food.name));

        info!(
            "recipe suggestion '{}' produced for practitioner {}",
            generated.recipe_name,
            identity.id()
        );

        Ok(RecipeSuggestion {
            food_id: food.id,
            recipe_name: generated.recipe_name,
            description: generated.description,
            ingredients: generated.ingredients,
            instructions: generated.instructions,
            cooking_time: generated.cooking_time,
            difficulty: generated.difficulty,
            servings: generated.servings,
            nutrition: generated.nutrition,
            ayurvedic_benefits: generated.ayurvedic_benefits,
            best_time_to_consume: generated.best_time_to_consume,
            cooking_tips: generated.cooking_tips,
            storage_instructions: generated.storage_instructions,
            youtube_url: youtube_search_url(&youtube_search),
            youtube_search,
            ai_model: self.llm_client.model_name(),
            confidence: RECIPE_CHAT_CONFIDENCE,
        })
    }
}
