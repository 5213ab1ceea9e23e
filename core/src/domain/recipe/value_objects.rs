use uuid::Uuid;

use crate::domain::diet_chart::entities::MealType;

#[derive(Debug, Clone)]
pub struct GenerateRecipeInput {
    pub food_id: Uuid,
    /// Defaults to lunch.
    pub meal_type: Option<MealType>,
}

#[derive(Debug, Clone)]
pub struct RecipeChatInput {
    pub food_id: Uuid,
    pub request: Option<String>,
}
