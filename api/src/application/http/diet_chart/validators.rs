use aahaara_core::domain::diet_chart::entities::ChartStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateDietChartValidator {
    /// Defaults to the configured planner duration.
    #[serde(default)]
    #[validate(range(min = 1, message = "duration_days must be positive"))]
    pub duration_days: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateChartStatusValidator {
    pub status: ChartStatus,
}
