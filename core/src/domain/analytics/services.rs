use tracing::instrument;

use crate::domain::{
    analytics::{
        entities::{PractitionerAnalytics, RECENT_ACTIVITY_LIMIT},
        ports::AnalyticsService,
    },
    authentication::{ports::TokenVerifier, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    diet_chart::ports::DietChartRepository,
    food::ports::FoodRepository,
    health::ports::HealthCheckRepository,
    patient::ports::PatientRepository,
    recipe::ports::{LLMClient, RecipeRepository},
    specialist::{ports::SwapLogRepository, value_objects::GetSwapLogsFilter},
};

impl<F, P, D, SL, RC, HC, LLM, TV> AnalyticsService for Service<F, P, D, SL, RC, HC, LLM, TV>
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
    #[instrument(skip(self, identity), fields(practitioner_id = %identity.id()))]
    async fn get_analytics(&self, identity: Identity) -> Result<PractitionerAnalytics, CoreError> {
        let practitioner_id = identity.id();

        let total_patients = self
            .patient_repository
            .count_by_practitioner(practitioner_id)
            .await?;
        let charts = self
            .diet_chart_repository
            .count_charts_by_practitioner(practitioner_id)
            .await?;
        let total_swaps = self
            .swap_log_repository
            .count_by_practitioner(practitioner_id)
            .await?;

        let recent_charts = self
            .diet_chart_repository
            .list_recent_charts(practitioner_id, RECENT_ACTIVITY_LIMIT)
            .await?;
        let recent_swaps = self
            .swap_log_repository
            .fetch_logs_by_practitioner(
                practitioner_id,
                GetSwapLogsFilter {
                    limit: Some(RECENT_ACTIVITY_LIMIT as u32),
                    ..Default::default()
                },
            )
            .await?;

        Ok(PractitionerAnalytics {
            total_patients,
            total_charts: charts.total,
            active_charts: charts.active,
            total_swaps,
            recent_charts,
            recent_swaps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_utils::{practitioner, sample_patient, seeded_chart},
        diet_chart::{
            entities::ChartStatus,
            ports::DietChartService,
            value_objects::{GenerateDietChartInput, UpdateChartStatusInput},
        },
        specialist::{ports::SpecialistService, value_objects::SwapFoodInput},
    };

    #[tokio::test]
    async fn summary_counts_only_the_callers_practice() {
        let identity = practitioner();
        let (service, chart_id) = seeded_chart(&identity).await;

        service
            .update_chart_status(
                identity.clone(),
                UpdateChartStatusInput {
                    chart_id,
                    status: ChartStatus::Active,
                },
            )
            .await
            .unwrap();

        let detail = service
            .get_diet_chart(identity.clone(), chart_id)
            .await
            .unwrap();
        let item = detail.meal_plans[0].items[0].clone();
        let replacement = service
            .food_repository
            .foods()
            .into_iter()
            .find(|food| food.id != item.food_id)
            .unwrap();
        service
            .swap_food(
                identity.clone(),
                SwapFoodInput {
                    item_id: item.id,
                    new_food_id: replacement.id,
                    reason: None,
                },
            )
            .await
            .unwrap();

        let other = practitioner();
        let other_patient = sample_patient(other.id());
        let service = service.with_patients(vec![other_patient.clone()]);
        service
            .generate_diet_chart(
                other.clone(),
                GenerateDietChartInput {
                    patient_id: other_patient.id,
                    duration_days: Some(1),
                },
            )
            .await
            .unwrap();

        let summary = service.get_analytics(identity.clone()).await.unwrap();

        assert_eq!(summary.total_patients, 1);
        assert_eq!(summary.total_charts, 1);
        assert_eq!(summary.active_charts, 1);
        assert_eq!(summary.total_swaps, 1);
        assert_eq!(summary.recent_charts.len(), 1);
        assert_eq!(summary.recent_charts[0].id, chart_id);
        assert_eq!(summary.recent_swaps[0].practitioner_id, identity.id());

        let others = service.get_analytics(other).await.unwrap();
        assert_eq!(others.total_charts, 1);
        assert_eq!(others.active_charts, 0);
        assert_eq!(others.total_swaps, 0);
    }

    #[tokio::test]
    async fn recent_charts_are_capped_and_newest_first() {
        let identity = practitioner();
        let patient = sample_patient(identity.id());
        let (service, _) = seeded_chart(&identity).await;
        let service = service.with_patients(vec![patient.clone()]);

        for _ in 0..6 {
            service
                .generate_diet_chart(
                    identity.clone(),
                    GenerateDietChartInput {
                        patient_id: patient.id,
                        duration_days: Some(1),
                    },
                )
                .await
                .unwrap();
        }

        let summary = service.get_analytics(identity).await.unwrap();

        assert_eq!(summary.total_patients, 2);
        assert_eq!(summary.total_charts, 7);
        assert_eq!(summary.recent_charts.len(), RECENT_ACTIVITY_LIMIT as usize);
        assert!(
            summary
                .recent_charts
                .windows(2)
                .all(|pair| pair[0].created_at >= pair[1].created_at)
        );
    }
}
