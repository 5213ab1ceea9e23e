use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SimilarFoodsQuery {
    /// Number of suggestions, clamped to the configured maximum.
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SwapFoodValidator {
    pub new_food_id: Uuid,

    #[serde(default)]
    #[validate(length(max = 500, message = "reason is too long"))]
    pub reason: Option<String>,
}
