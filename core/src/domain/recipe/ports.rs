use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{FoodRecipes, Recipe, RecipeSuggestion},
        value_objects::{GenerateRecipeInput, RecipeChatInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn get_recipes(
        &self,
        identity: Identity,
        food_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// Visible recipes for every food currently served in the chart.
    fn get_chart_recipes(
        &self,
        identity: Identity,
        chart_id: Uuid,
    ) -> impl Future<Output = Result<Vec<FoodRecipes>, CoreError>> + Send;

    fn generate_recipe(
        &self,
        identity: Identity,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn recipe_chat(
        &self,
        identity: Identity,
        input: RecipeChatInput,
    ) -> impl Future<Output = Result<RecipeSuggestion, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn fetch_recipes_by_food(
        &self,
        food_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn create_recipe(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}

/// Text generation constrained by a JSON response schema.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Name of the model behind this client.
    fn model_name(&self) -> String;
}
