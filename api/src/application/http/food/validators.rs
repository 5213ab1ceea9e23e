use aahaara_core::domain::food::entities::{
    AllergenFlags, DietaryFlags, DoshaEffect, Energy, Taste,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFoodValidator {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "category is required"))]
    pub category: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub subcategory: Option<String>,

    #[validate(range(min = 0, message = "calories must be non-negative"))]
    pub calories: i32,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub protein: f64,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub carbohydrates: f64,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub fat: f64,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub fiber: f64,

    pub primary_taste: Taste,

    #[serde(default)]
    pub secondary_taste: Option<Taste>,

    pub energy: Energy,
    pub vata_effect: DoshaEffect,
    pub pitta_effect: DoshaEffect,
    pub kapha_effect: DoshaEffect,

    #[serde(default)]
    pub dietary: DietaryFlags,

    #[serde(default)]
    pub allergens: AllergenFlags,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFoodValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub subcategory: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub calories: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub protein: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub carbohydrates: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub fat: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub fiber: Option<f64>,

    #[serde(default)]
    pub primary_taste: Option<Taste>,

    #[serde(default)]
    pub secondary_taste: Option<Taste>,

    #[serde(default)]
    pub energy: Option<Energy>,

    #[serde(default)]
    pub vata_effect: Option<DoshaEffect>,

    #[serde(default)]
    pub pitta_effect: Option<DoshaEffect>,

    #[serde(default)]
    pub kapha_effect: Option<DoshaEffect>,

    #[serde(default)]
    pub dietary: Option<DietaryFlags>,

    #[serde(default)]
    pub allergens: Option<AllergenFlags>,

    #[serde(default)]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_defaults_flags_and_rejects_negative_values() {
        let payload: CreateFoodValidator = serde_json::from_value(json!({
            "name": "Mung Dal",
            "category": "legumes",
            "calories": -10,
            "primary_taste": "sweet",
            "energy": "cooling",
            "vata_effect": "neutral",
            "pitta_effect": "pacifies",
            "kapha_effect": "pacifies"
        }))
        .unwrap();

        assert!(payload.dietary.is_vegan);
        assert!(!payload.allergens.contains_nuts);
        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_accepts_an_empty_body() {
        let payload: UpdateFoodValidator = serde_json::from_value(json!({})).unwrap();
        assert!(payload.validate().is_ok());
    }
}
