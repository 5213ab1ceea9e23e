use uuid::Uuid;

use crate::domain::food::entities::{
    AllergenFlags, DietaryFlags, DoshaEffect, Energy, FoodConfig, Taste,
};

#[derive(Debug, Clone, Default)]
pub struct GetFoodsFilter {
    pub category: Option<String>,
    pub category_in: Option<Vec<String>>,
    pub name_like: Option<String>,
    pub primary_taste: Option<Taste>,
    pub energy: Option<Energy>,
    pub calories_gte: Option<i32>,
    pub calories_lte: Option<i32>,
    pub is_vegetarian: Option<bool>,
    pub is_vegan: Option<bool>,
    pub include_inactive: bool,
    pub sort: Option<String>, // e.g. "name" or "-calories,name"
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct CreateFoodInput {
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub calories: i32,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub primary_taste: Taste,
    pub secondary_taste: Option<Taste>,
    pub energy: Energy,
    pub vata_effect: DoshaEffect,
    pub pitta_effect: DoshaEffect,
    pub kapha_effect: DoshaEffect,
    pub dietary: DietaryFlags,
    pub allergens: AllergenFlags,
}

impl From<CreateFoodInput> for FoodConfig {
    fn from(input: CreateFoodInput) -> Self {
        Self {
            name: input.name,
            category: input.category,
            subcategory: input.subcategory,
            calories: input.calories,
            protein: input.protein,
            carbohydrates: input.carbohydrates,
            fat: input.fat,
            fiber: input.fiber,
            primary_taste: input.primary_taste,
            secondary_taste: input.secondary_taste,
            energy: input.energy,
            vata_effect: input.vata_effect,
            pitta_effect: input.pitta_effect,
            kapha_effect: input.kapha_effect,
            dietary: input.dietary,
            allergens: input.allergens,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFoodInput {
    pub food_id: Uuid,
    pub name: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub calories: Option<i32>,
    pub protein: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub primary_taste: Option<Taste>,
    pub secondary_taste: Option<Taste>,
    pub energy: Option<Energy>,
    pub vata_effect: Option<DoshaEffect>,
    pub pitta_effect: Option<DoshaEffect>,
    pub kapha_effect: Option<DoshaEffect>,
    pub dietary: Option<DietaryFlags>,
    pub allergens: Option<AllergenFlags>,
    pub is_active: Option<bool>,
}
