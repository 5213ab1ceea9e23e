use crate::domain::{
    authentication::ports::TokenVerifier,
    common::{entities::app_errors::CoreError, services::Service},
    diet_chart::ports::DietChartRepository,
    food::ports::FoodRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    patient::ports::PatientRepository,
    recipe::ports::{LLMClient, RecipeRepository},
    specialist::ports::SwapLogRepository,
};

impl<F, P, D, SL, RC, HC, LLM, TV> HealthCheckService for Service<F, P, D, SL, RC, HC, LLM, TV>
where
    F: FoodRepository,
    P: PatientRepository,
    D: DietChartRepository,
    SL: SwapLogRepository,
    RC: RecipeRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    TV: TokenVerifier,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_utils::test_service;

    #[tokio::test]
    async fn readiness_reports_the_store_probe() {
        let status = test_service().readness().await.unwrap();

        assert!(status.is_healthy);
    }
}
