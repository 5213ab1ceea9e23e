use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        diet_chart::entities::{DietChart, MealItem, MealPlan},
    },
    entity::{diet_charts, meal_items, meal_plans},
};

impl TryFrom<&diet_charts::Model> for DietChart {
    type Error = CoreError;

    fn try_from(model: &diet_charts::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            patient_id: model.patient_id,
            practitioner_id: model.practitioner_id,
            title: model.title.clone(),
            description: model.description.clone(),
            status: model.status.parse()?,
            duration_days: model.duration_days,
            generated_by_ai: model.generated_by_ai,
            ai_model_used: model.ai_model_used.clone(),
            generation_notes: model.generation_notes.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

impl TryFrom<diet_charts::Model> for DietChart {
    type Error = CoreError;

    fn try_from(model: diet_charts::Model) -> Result<Self, Self::Error> {
        Self::try_from(&model)
    }
}

impl TryFrom<&meal_plans::Model> for MealPlan {
    type Error = CoreError;

    fn try_from(model: &meal_plans::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            diet_chart_id: model.diet_chart_id,
            day_number: model.day_number,
            meal_type: model.meal_type.parse()?,
            meal_time: model.meal_time,
            target_calories: model.target_calories,
            target_protein: model.target_protein,
            target_carbs: model.target_carbs,
            target_fat: model.target_fat,
            items: Vec::new(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

impl From<&meal_items::Model> for MealItem {
    fn from(model: &meal_items::Model) -> Self {
        Self {
            id: model.id,
            meal_plan_id: model.meal_plan_id,
            food_id: model.food_id,
            quantity: model.quantity,
            serving_size: model.serving_size.clone(),
            calories: model.calories,
            protein: model.protein,
            carbohydrates: model.carbohydrates,
            fat: model.fat,
            fiber: model.fiber,
            is_ai_generated: model.is_ai_generated,
            ai_confidence_score: model.ai_confidence_score,
            swapped_from_id: model.swapped_from_id,
            swap_reason: model.swap_reason.clone(),
            is_current: model.is_current,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<meal_items::Model> for MealItem {
    fn from(model: meal_items::Model) -> Self {
        Self::from(&model)
    }
}
