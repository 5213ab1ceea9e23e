use uuid::Uuid;

use crate::domain::diet_chart::entities::ChartStatus;

#[derive(Debug, Clone)]
pub struct GenerateDietChartInput {
    pub patient_id: Uuid,
    /// Falls back to the planner's default duration.
    pub duration_days: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct UpdateChartStatusInput {
    pub chart_id: Uuid,
    pub status: ChartStatus,
}
