use aahaara_core::domain::diet_chart::entities::MealType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeValidator {
    /// Picks the template family. Defaults to lunch.
    #[serde(default)]
    pub meal_type: Option<MealType>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecipeChatValidator {
    #[serde(default)]
    #[validate(length(max = 1000, message = "request is too long"))]
    pub request: Option<String>,
}
