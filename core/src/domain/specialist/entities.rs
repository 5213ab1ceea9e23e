use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp, diet_chart::entities::MealItem, food::entities::Food,
};

pub const SPECIALIST_MODEL: &str = "vector_similarity_specialist";

/// Relative weight of each similarity factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityWeights {
    pub ayurvedic: f64,
    pub nutritional: f64,
    pub category: f64,
    pub compatibility: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            ayurvedic: 0.4,
            nutritional: 0.3,
            category: 0.2,
            compatibility: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityConfig {
    pub weights: SimilarityWeights,
    /// Scores must be strictly above this to be suggested.
    pub threshold: f64,
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            weights: SimilarityWeights::default(),
            threshold: 0.3,
            default_limit: 5,
            max_limit: 50,
        }
    }
}

impl SimilarityConfig {
    pub fn limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .clamp(1, self.max_limit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SimilarFood {
    pub food: Food,
    pub similarity_score: f64,
    pub reason: String,
}

/// Append-only record of a food substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodSwapLog {
    pub id: Uuid,
    pub meal_item_id: Uuid,
    pub practitioner_id: Uuid,
    pub original_food_id: Uuid,
    pub new_food_id: Uuid,
    pub swap_reason: String,
    pub similarity_score: f64,
    pub ai_model_used: String,
    pub alternative_suggestions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl FoodSwapLog {
    pub fn new(
        meal_item_id: Uuid,
        practitioner_id: Uuid,
        original_food_id: Uuid,
        new_food_id: Uuid,
        swap_reason: String,
        similarity_score: f64,
        alternative_suggestions: Vec<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            meal_item_id,
            practitioner_id,
            original_food_id,
            new_food_id,
            swap_reason,
            similarity_score,
            ai_model_used: SPECIALIST_MODEL.to_string(),
            alternative_suggestions,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SwapOutcome {
    pub original_food: Food,
    pub new_food: Food,
    pub meal_item: MealItem,
    pub log: FoodSwapLog,
}
