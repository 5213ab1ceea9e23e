use tracing::info;

use crate::{
    domain::common::{
        AahaaraConfig, entities::app_errors::CoreError, policies::AahaaraPolicy,
        services::Service,
    },
    infrastructure::{
        db::postgres::Postgres,
        diet_chart::repositories::diet_chart_repository::PostgresDietChartRepository,
        food::repositories::food_repository::PostgresFoodRepository,
        health::repositories::health_check_repository::PostgresHealthCheckRepository,
        jwt::hs256_verifier::Hs256TokenVerifier,
        llm::gemini_client::GeminiLLMClient,
        patient::repositories::patient_repository::PostgresPatientRepository,
        recipe::repositories::recipe_repository::PostgresRecipeRepository,
        specialist::repositories::swap_log_repository::PostgresSwapLogRepository,
    },
};

pub type AahaaraService = Service<
    PostgresFoodRepository,
    PostgresPatientRepository,
    PostgresDietChartRepository,
    PostgresSwapLogRepository,
    PostgresRecipeRepository,
    PostgresHealthCheckRepository,
    GeminiLLMClient,
    Hs256TokenVerifier,
>;

/// Connects to the database, applies pending migrations and wires every
/// adapter into one service.
pub async fn create_service(config: AahaaraConfig) -> Result<AahaaraService, CoreError> {
    let postgres = Postgres::new(&config.database).await?;
    postgres.migrate().await?;
    let db = postgres.get_db();

    let service = Service::new(
        PostgresFoodRepository::new(db.clone()),
        PostgresPatientRepository::new(db.clone()),
        PostgresDietChartRepository::new(db.clone()),
        PostgresSwapLogRepository::new(db.clone()),
        PostgresRecipeRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        GeminiLLMClient::new(config.llm.gemini_api_key, config.llm.gemini_model),
        Hs256TokenVerifier::new(&config.auth.jwt_secret, config.auth.jwt_issuer),
        AahaaraPolicy::new(),
    )
    .with_planner(config.planner)
    .with_similarity(config.similarity)
    .with_candidates(config.candidates);

    info!("aahaara service ready");
    Ok(service)
}
