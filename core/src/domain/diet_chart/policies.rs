use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        policies::{AahaaraPolicy, Policy},
    },
    diet_chart::{entities::DietChart, ports::DietChartPolicy},
};

impl DietChartPolicy for AahaaraPolicy {
    async fn can_view_chart(&self, identity: Identity, chart: &DietChart) -> Result<bool, CoreError> {
        Ok(self.is_owner(&identity, chart.practitioner_id))
    }

    async fn can_manage_chart(
        &self,
        identity: Identity,
        chart: &DietChart,
    ) -> Result<bool, CoreError> {
        Ok(self.is_owner(&identity, chart.practitioner_id))
    }
}
