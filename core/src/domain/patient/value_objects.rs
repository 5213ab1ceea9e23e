use uuid::Uuid;

use crate::domain::patient::entities::{ActivityLevel, Constitution, Gender};

#[derive(Debug, Clone, Default)]
pub struct GetPatientsFilter {
    pub name_like: Option<String>,
    pub constitution: Option<Constitution>,
    pub include_inactive: bool,
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct CreatePatientInput {
    pub name: String,
    pub constitution: Constitution,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub allergies: Vec<String>,
    pub dietary_preferences: Vec<String>,
    pub food_dislikes: Vec<String>,
    pub medical_conditions: Vec<String>,
    pub primary_goal: Option<String>,
    pub target_weight: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePatientInput {
    pub patient_id: Uuid,
    pub name: Option<String>,
    pub constitution: Option<Constitution>,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub allergies: Option<Vec<String>>,
    pub dietary_preferences: Option<Vec<String>>,
    pub food_dislikes: Option<Vec<String>>,
    pub medical_conditions: Option<Vec<String>>,
    pub primary_goal: Option<String>,
    pub target_weight: Option<f64>,
    pub is_active: Option<bool>,
}
