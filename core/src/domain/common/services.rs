use crate::domain::{
    authentication::ports::TokenVerifier,
    common::policies::AahaaraPolicy,
    compatibility::entities::CandidatePolicy,
    diet_chart::{entities::PlannerConfig, ports::DietChartRepository},
    food::ports::FoodRepository,
    health::ports::HealthCheckRepository,
    patient::ports::PatientRepository,
    recipe::ports::{LLMClient, RecipeRepository},
    specialist::{entities::SimilarityConfig, ports::SwapLogRepository},
};

#[derive(Clone)]
pub struct Service<F, P, D, SL, RC, HC, LLM, TV>
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
    pub(crate) food_repository: F,
    pub(crate) patient_repository: P,
    pub(crate) diet_chart_repository: D,
    pub(crate) swap_log_repository: SL,
    pub(crate) recipe_repository: RC,
    pub(crate) health_check_repository: HC,
    pub(crate) llm_client: LLM,
    pub(crate) token_verifier: TV,

    pub(crate) policy: AahaaraPolicy,
    pub(crate) planner: PlannerConfig,
    pub(crate) similarity: SimilarityConfig,
    pub(crate) candidates: CandidatePolicy,
}

impl<F, P, D, SL, RC, HC, LLM, TV> Service<F, P, D, SL, RC, HC, LLM, TV>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        food_repository: F,
        patient_repository: P,
        diet_chart_repository: D,
        swap_log_repository: SL,
        recipe_repository: RC,
        health_check_repository: HC,
        llm_client: LLM,
        token_verifier: TV,
        policy: AahaaraPolicy,
    ) -> Self {
        Self {
            food_repository,
            patient_repository,
            diet_chart_repository,
            swap_log_repository,
            recipe_repository,
            health_check_repository,
            llm_client,
            token_verifier,
            policy,
            planner: PlannerConfig::default(),
            similarity: SimilarityConfig::default(),
            candidates: CandidatePolicy::default(),
        }
    }

    pub fn with_planner(mut self, planner: PlannerConfig) -> Self {
        self.planner = planner;
        self
    }

    pub fn with_similarity(mut self, similarity: SimilarityConfig) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn with_candidates(mut self, candidates: CandidatePolicy) -> Self {
        self.candidates = candidates;
        self
    }
}
