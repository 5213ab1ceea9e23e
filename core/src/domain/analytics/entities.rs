use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{diet_chart::entities::DietChart, specialist::entities::FoodSwapLog};

/// Entries listed under recent activity.
pub const RECENT_ACTIVITY_LIMIT: u64 = 5;

/// Practice summary scoped to one practitioner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PractitionerAnalytics {
    pub total_patients: u64,
    pub total_charts: u64,
    pub active_charts: u64,
    pub total_swaps: u64,
    /// Newest first.
    pub recent_charts: Vec<DietChart>,
    /// Newest first.
    pub recent_swaps: Vec<FoodSwapLog>,
}
