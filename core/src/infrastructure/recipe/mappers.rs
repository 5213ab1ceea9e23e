use sea_orm::prelude::Json;

use crate::{
    domain::recipe::entities::{CookingTime, Difficulty, Ingredient, Recipe},
    entity::recipes,
    infrastructure::patient::mappers::{string_list, to_json_list},
};

pub fn ingredients_to_json(ingredients: &[Ingredient]) -> Json {
    serde_json::to_value(ingredients).unwrap_or_else(|_| Json::Array(Vec::new()))
}

pub fn instructions_to_json(instructions: &[String]) -> Json {
    to_json_list(instructions)
}

impl From<&recipes::Model> for Recipe {
    fn from(model: &recipes::Model) -> Self {
        Self {
            id: model.id,
            food_id: model.food_id,
            name: model.name.clone(),
            description: model.description.clone(),
            ingredients: serde_json::from_value(model.ingredients.clone()).unwrap_or_default(),
            instructions: string_list(&model.instructions),
            cooking_time: CookingTime::parse(&model.cooking_time),
            difficulty: Difficulty::parse(&model.difficulty),
            servings: model.servings,
            calories_per_serving: model.calories_per_serving,
            protein_per_serving: model.protein_per_serving,
            carbs_per_serving: model.carbs_per_serving,
            fat_per_serving: model.fat_per_serving,
            ayurvedic_benefits: model.ayurvedic_benefits.clone(),
            best_time_to_eat: model.best_time_to_eat.clone(),
            seasonal_notes: model.seasonal_notes.clone(),
            dosha_considerations: model.dosha_considerations.clone(),
            cooking_tips: model.cooking_tips.clone(),
            variations: model.variations.clone(),
            storage_instructions: model.storage_instructions.clone(),
            video_url: model.video_url.clone(),
            created_by: model.created_by,
            is_public: model.is_public,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}
