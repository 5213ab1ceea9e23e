use aahaara_core::domain::patient::entities::{ActivityLevel, Constitution, Gender};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePatientValidator {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,

    pub constitution: Constitution,

    #[serde(default)]
    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    pub age: Option<i32>,

    /// Centimetres.
    #[serde(default)]
    #[validate(range(min = 30.0, max = 272.0))]
    pub height: Option<f64>,

    /// Kilograms.
    #[serde(default)]
    #[validate(range(min = 2.0, max = 500.0))]
    pub weight: Option<f64>,

    #[serde(default)]
    pub gender: Gender,

    #[serde(default)]
    pub activity_level: ActivityLevel,

    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default)]
    pub dietary_preferences: Vec<String>,

    #[serde(default)]
    pub food_dislikes: Vec<String>,

    #[serde(default)]
    pub medical_conditions: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub primary_goal: Option<String>,

    #[serde(default)]
    #[validate(range(min = 2.0, max = 500.0))]
    pub target_weight: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePatientValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[serde(default)]
    pub constitution: Option<Constitution>,

    #[serde(default)]
    #[validate(range(min = 1, max = 120))]
    pub age: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 30.0, max = 272.0))]
    pub height: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 2.0, max = 500.0))]
    pub weight: Option<f64>,

    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,

    #[serde(default)]
    pub allergies: Option<Vec<String>>,

    #[serde(default)]
    pub dietary_preferences: Option<Vec<String>>,

    #[serde(default)]
    pub food_dislikes: Option<Vec<String>>,

    #[serde(default)]
    pub medical_conditions: Option<Vec<String>>,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub primary_goal: Option<String>,

    #[serde(default)]
    #[validate(range(min = 2.0, max = 500.0))]
    pub target_weight: Option<f64>,

    #[serde(default)]
    pub is_active: Option<bool>,
}
