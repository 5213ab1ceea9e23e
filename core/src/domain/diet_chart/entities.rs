use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp, round2},
    food::entities::Food,
    patient::entities::Patient,
};

pub const ARCHITECT_MODEL: &str = "rule_based_architect";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(CoreError::Invalid(format!("unknown meal type '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChartStatus {
    #[default]
    Draft,
    Active,
    Completed,
    Archived,
}

impl ChartStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartStatus::Draft => "draft",
            ChartStatus::Active => "active",
            ChartStatus::Completed => "completed",
            ChartStatus::Archived => "archived",
        }
    }

    /// Archived charts are frozen.
    pub fn can_transition_to(&self, next: ChartStatus) -> bool {
        !matches!(self, ChartStatus::Archived) || next == ChartStatus::Archived
    }
}

impl FromStr for ChartStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(ChartStatus::Draft),
            "active" => Ok(ChartStatus::Active),
            "completed" => Ok(ChartStatus::Completed),
            "archived" => Ok(ChartStatus::Archived),
            other => Err(CoreError::Invalid(format!("unknown chart status '{other}'"))),
        }
    }
}

/// One meal of the day: when it is served and its share of the daily calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealSlot {
    pub meal_type: MealType,
    pub meal_time: NaiveTime,
    pub calorie_percent: u32,
}

impl MealSlot {
    fn at(meal_type: MealType, hour: u32, calorie_percent: u32) -> Self {
        Self {
            meal_type,
            meal_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN),
            calorie_percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub slots: Vec<MealSlot>,
    pub foods_per_meal: usize,
    pub main_portion_grams: f64,
    pub side_portion_grams: f64,
    pub rule_confidence: f64,
    pub default_duration_days: i32,
    pub max_duration_days: i32,
    /// Fixed seed for reproducible meal sampling.
    pub rng_seed: Option<u64>,
    pub generate_recipes: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            slots: vec![
                MealSlot::at(MealType::Breakfast, 8, 25),
                MealSlot::at(MealType::Lunch, 13, 40),
                MealSlot::at(MealType::Dinner, 19, 30),
                MealSlot::at(MealType::Snack, 16, 5),
            ],
            foods_per_meal: 3,
            main_portion_grams: 150.0,
            side_portion_grams: 100.0,
            rule_confidence: 0.8,
            default_duration_days: 7,
            max_duration_days: 90,
            rng_seed: None,
            generate_recipes: true,
        }
    }
}

/// Chart totals for one practitioner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartCounts {
    pub total: u64,
    pub active: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietChart {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub practitioner_id: Uuid,
    pub title: String,
    pub description: String,
    pub status: ChartStatus,
    pub duration_days: i32,
    pub generated_by_ai: bool,
    pub ai_model_used: String,
    pub generation_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DietChart {
    pub fn generated(patient: &Patient, duration_days: i32) -> Self {
        let (now, timestamp) = generate_timestamp();
        let constitution = patient.constitution.display_name();

        Self {
            id: Uuid::new_v7(timestamp),
            patient_id: patient.id,
            practitioner_id: patient.practitioner_id,
            title: format!("AI-Generated Diet Plan for {}", patient.name),
            description: format!(
                "Personalized Ayurvedic diet plan based on {constitution} constitution"
            ),
            status: ChartStatus::Draft,
            duration_days,
            generated_by_ai: true,
            ai_model_used: ARCHITECT_MODEL.to_string(),
            generation_notes: format!(
                "Generated for {constitution} constitution with {} activity level",
                patient.activity_level.as_str()
            ),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_status(&mut self, status: ChartStatus) -> Result<(), CoreError> {
        if !self.status.can_transition_to(status) {
            return Err(CoreError::Invalid(format!(
                "chart is {} and cannot become {}",
                self.status.as_str(),
                status.as_str()
            )));
        }
        self.status = status;
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Macronutrient goals for a meal, derived from its calorie share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealTargets {
    pub calories: i32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MealTargets {
    pub fn from_daily(daily_calories: i32, calorie_percent: u32) -> Self {
        let calories = (daily_calories as i64 * calorie_percent as i64 / 100) as i32;
        let kcal = calories as f64;

        Self {
            calories,
            protein: kcal * 0.15 / 4.0,
            carbs: kcal * 0.55 / 4.0,
            fat: kcal * 0.30 / 9.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub id: Uuid,
    pub diet_chart_id: Uuid,
    pub day_number: i32,
    pub meal_type: MealType,
    pub meal_time: NaiveTime,
    pub target_calories: i32,
    pub target_protein: f64,
    pub target_carbs: f64,
    pub target_fat: f64,
    pub items: Vec<MealItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MealPlan {
    pub fn new(diet_chart_id: Uuid, day_number: i32, slot: &MealSlot, targets: MealTargets) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            diet_chart_id,
            day_number,
            meal_type: slot.meal_type,
            meal_time: slot.meal_time,
            target_calories: targets.calories,
            target_protein: targets.protein,
            target_carbs: targets.carbs,
            target_fat: targets.fat,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealItem {
    pub id: Uuid,
    pub meal_plan_id: Uuid,
    pub food_id: Uuid,
    /// Grams.
    pub quantity: f64,
    pub serving_size: String,
    pub calories: i32,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub is_ai_generated: bool,
    pub ai_confidence_score: Option<f64>,
    pub swapped_from_id: Option<Uuid>,
    pub swap_reason: String,
    /// False once a swap has replaced this item.
    pub is_current: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MealItem {
    pub fn new(meal_plan_id: Uuid, food: &Food, quantity: f64, confidence: Option<f64>) -> Self {
        let (now, timestamp) = generate_timestamp();

        let mut item = Self {
            id: Uuid::new_v7(timestamp),
            meal_plan_id,
            food_id: food.id,
            quantity,
            serving_size: format!("{quantity:.0}g"),
            calories: 0,
            protein: 0.0,
            carbohydrates: 0.0,
            fat: 0.0,
            fiber: 0.0,
            is_ai_generated: confidence.is_some(),
            ai_confidence_score: confidence,
            swapped_from_id: None,
            swap_reason: String::new(),
            is_current: true,
            created_at: now,
            updated_at: now,
        };
        item.recompute_nutrients(food);
        item
    }

    /// Nutrients scale linearly from the food's per-100 g values.
    pub fn recompute_nutrients(&mut self, food: &Food) {
        let multiplier = self.quantity / 100.0;
        self.food_id = food.id;
        self.calories = (food.calories as f64 * multiplier) as i32;
        self.protein = round2(food.protein * multiplier);
        self.carbohydrates = round2(food.carbohydrates * multiplier);
        self.fat = round2(food.fat * multiplier);
        self.fiber = round2(food.fiber * multiplier);
    }

    /// The item that supersedes this one when its food is swapped.
    pub fn replacement(&self, new_food: &Food, reason: String, similarity: f64) -> Self {
        let mut item = MealItem::new(self.meal_plan_id, new_food, self.quantity, None);
        item.serving_size = self.serving_size.clone();
        item.ai_confidence_score = Some(similarity);
        item.swapped_from_id = Some(self.id);
        item.swap_reason = reason;
        item
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietChartDetail {
    pub chart: DietChart,
    pub meal_plans: Vec<MealPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkippedDay {
    pub day: i32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkippedRecipe {
    pub food_id: Uuid,
    pub reason: String,
}

/// Per-unit results of one generation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerationReport {
    pub succeeded_days: Vec<i32>,
    pub skipped_days: Vec<SkippedDay>,
    pub generated_recipes: Vec<Uuid>,
    pub existing_recipes: usize,
    pub skipped_recipes: Vec<SkippedRecipe>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerationOutcome {
    pub chart: DietChart,
    pub total_meals: i32,
    pub fallback_used: bool,
    pub message: String,
    pub report: GenerationReport,
}
