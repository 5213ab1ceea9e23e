use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{entities::Recipe, ports::RecipeRepository},
    },
    entity::recipes::{ActiveModel, Column, Entity},
    infrastructure::recipe::mappers::{ingredients_to_json, instructions_to_json},
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn fetch_recipes_by_food(&self, food_id: Uuid) -> Result<Vec<Recipe>, CoreError> {
        let models = Entity::find()
            .filter(Column::FoodId.eq(food_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.iter().map(Recipe::from).collect())
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let model = Entity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.as_ref().map(Recipe::from))
    }

    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let active_model = ActiveModel {
            id: Set(recipe.id),
            food_id: Set(recipe.food_id),
            name: Set(recipe.name.clone()),
            description: Set(recipe.description.clone()),
            ingredients: Set(ingredients_to_json(&recipe.ingredients)),
            instructions: Set(instructions_to_json(&recipe.instructions)),
            cooking_time: Set(recipe.cooking_time.as_str().to_string()),
            difficulty: Set(recipe.difficulty.as_str().to_string()),
            servings: Set(recipe.servings),
            calories_per_serving: Set(recipe.calories_per_serving),
            protein_per_serving: Set(recipe.protein_per_serving),
            carbs_per_serving: Set(recipe.carbs_per_serving),
            fat_per_serving: Set(recipe.fat_per_serving),
            ayurvedic_benefits: Set(recipe.ayurvedic_benefits.clone()),
            best_time_to_eat: Set(recipe.best_time_to_eat.clone()),
            seasonal_notes: Set(recipe.seasonal_notes.clone()),
            dosha_considerations: Set(recipe.dosha_considerations.clone()),
            cooking_tips: Set(recipe.cooking_tips.clone()),
            variations: Set(recipe.variations.clone()),
            storage_instructions: Set(recipe.storage_instructions.clone()),
            video_url: Set(recipe.video_url.clone()),
            created_by: Set(recipe.created_by),
            is_public: Set(recipe.is_public),
            created_at: Set(recipe.created_at.fixed_offset()),
            updated_at: Set(recipe.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::Conflict,
                _ => {
                    error!("Failed to create recipe: {}", e);
                    CoreError::InternalServerError
                }
            })?;

        Ok(Recipe::from(created))
    }
}
