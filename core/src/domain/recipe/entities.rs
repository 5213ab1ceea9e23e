use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

pub const RECIPE_CHAT_CONFIDENCE: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CookingTime {
    Quick,
    #[default]
    Moderate,
    Long,
}

impl CookingTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            CookingTime::Quick => "quick",
            CookingTime::Moderate => "moderate",
            CookingTime::Long => "long",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "quick" => CookingTime::Quick,
            "long" => CookingTime::Long,
            _ => CookingTime::Moderate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    #[serde(default)]
    pub notes: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            notes: notes.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub food_id: Uuid,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub cooking_time: CookingTime,
    pub difficulty: Difficulty,
    pub servings: i32,
    pub calories_per_serving: f64,
    pub protein_per_serving: f64,
    pub carbs_per_serving: f64,
    pub fat_per_serving: f64,
    pub ayurvedic_benefits: String,
    pub best_time_to_eat: String,
    pub seasonal_notes: String,
    pub dosha_considerations: String,
    pub cooking_tips: String,
    pub variations: String,
    pub storage_instructions: String,
    pub video_url: String,
    pub created_by: Uuid,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct RecipeConfig {
    pub food_id: Uuid,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub cooking_time: CookingTime,
    pub difficulty: Difficulty,
    pub servings: i32,
    pub nutrition: ServingNutrition,
    pub ayurvedic_benefits: String,
    pub best_time_to_eat: String,
    pub seasonal_notes: String,
    pub dosha_considerations: String,
    pub cooking_tips: String,
    pub variations: String,
    pub storage_instructions: String,
    pub video_url: String,
    pub created_by: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct ServingNutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Recipe {
    pub fn new(config: RecipeConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            food_id: config.food_id,
            name: config.name,
            description: config.description,
            ingredients: config.ingredients,
            instructions: config.instructions,
            cooking_time: config.cooking_time,
            difficulty: config.difficulty,
            servings: config.servings,
            calories_per_serving: config.nutrition.calories,
            protein_per_serving: config.nutrition.protein,
            carbs_per_serving: config.nutrition.carbs,
            fat_per_serving: config.nutrition.fat,
            ayurvedic_benefits: config.ayurvedic_benefits,
            best_time_to_eat: config.best_time_to_eat,
            seasonal_notes: config.seasonal_notes,
            dosha_considerations: config.dosha_considerations,
            cooking_tips: config.cooking_tips,
            variations: config.variations,
            storage_instructions: config.storage_instructions,
            video_url: config.video_url,
            created_by: config.created_by,
            is_public: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn visible_to(&self, practitioner_id: Uuid) -> bool {
        self.is_public || self.created_by == practitioner_id
    }
}

/// Recipes available for one food served in a diet chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodRecipes {
    pub food_id: Uuid,
    pub food_name: String,
    pub recipes: Vec<Recipe>,
}

/// A recipe proposed by the language model. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSuggestion {
    pub food_id: Uuid,
    pub recipe_name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub cooking_time: String,
    pub difficulty: String,
    pub servings: i32,
    pub nutrition: ServingNutrition,
    pub ayurvedic_benefits: String,
    pub best_time_to_consume: String,
    pub cooking_tips: String,
    pub storage_instructions: String,
    pub youtube_search: String,
    pub youtube_url: String,
    pub ai_model: String,
    pub confidence: f64,
}

/// Shape of the model's JSON answer.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedRecipe {
    pub recipe_name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub cooking_time: String,
    pub difficulty: String,
    pub servings: i32,
    pub nutrition: ServingNutrition,
    pub ayurvedic_benefits: String,
    pub best_time_to_consume: String,
    pub cooking_tips: String,
    pub storage_instructions: String,
    #[serde(default)]
    pub youtube_search: Option<String>,
}
