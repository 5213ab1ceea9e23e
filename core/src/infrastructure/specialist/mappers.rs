use crate::{
    domain::specialist::entities::FoodSwapLog, entity::food_swap_logs,
    infrastructure::patient::mappers::string_list,
};

impl From<&food_swap_logs::Model> for FoodSwapLog {
    fn from(model: &food_swap_logs::Model) -> Self {
        Self {
            id: model.id,
            meal_item_id: model.meal_item_id,
            practitioner_id: model.practitioner_id,
            original_food_id: model.original_food_id,
            new_food_id: model.new_food_id,
            swap_reason: model.swap_reason.clone(),
            similarity_score: model.similarity_score,
            ai_model_used: model.ai_model_used.clone(),
            alternative_suggestions: string_list(&model.alternative_suggestions),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<food_swap_logs::Model> for FoodSwapLog {
    fn from(model: food_swap_logs::Model) -> Self {
        Self::from(&model)
    }
}
