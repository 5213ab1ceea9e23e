use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    diet_chart::ports::DietChartRepository,
    food::ports::FoodRepository,
    health::ports::HealthCheckRepository,
    patient::{
        entities::{Patient, PatientConfig},
        ports::{PatientPolicy, PatientRepository, PatientService},
        value_objects::{CreatePatientInput, GetPatientsFilter, UpdatePatientInput},
    },
    recipe::ports::{LLMClient, RecipeRepository},
    specialist::ports::SwapLogRepository,
};

fn validate_measurements(patient: &Patient) -> Result<(), CoreError> {
    if let Some(age) = patient.age
        && !(1..=120).contains(&age)
    {
        return Err(CoreError::Invalid("age must be between 1 and 120".to_string()));
    }
    for (field, value) in [("height", patient.height), ("weight", patient.weight)] {
        if let Some(value) = value
            && (!value.is_finite() || value <= 0.0)
        {
            return Err(CoreError::Invalid(format!("{field} must be positive")));
        }
    }
    Ok(())
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
    /// Loads a patient and checks the caller may read it.
    pub(crate) async fn visible_patient(
        &self,
        identity: &Identity,
        patient_id: Uuid,
    ) -> Result<Patient, CoreError> {
        let patient = self
            .patient_repository
            .get_by_id(patient_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_view_patient(identity.clone(), &patient).await,
            "insufficient permissions",
        )?;

        Ok(patient)
    }
}

impl<F, P, D, SL, RC, HC, LLM, TV> PatientService for Service<F, P, D, SL, RC, HC, LLM, TV>
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
    async fn get_patients(
        &self,
        identity: Identity,
        filter: GetPatientsFilter,
    ) -> Result<Vec<Patient>, CoreError> {
        self.patient_repository
            .fetch_patients_by_practitioner(identity.id(), filter)
            .await
    }

    async fn get_patient(&self, identity: Identity, patient_id: Uuid) -> Result<Patient, CoreError> {
        self.visible_patient(&identity, patient_id).await
    }

    #[instrument(skip(self, identity, input), fields(practitioner_id = %identity.id()))]
    async fn create_patient(
        &self,
        identity: Identity,
        input: CreatePatientInput,
    ) -> Result<Patient, CoreError> {
        let patient = Patient::new(PatientConfig {
            practitioner_id: identity.id(),
            name: input.name,
            constitution: input.constitution,
            age: input.age,
            height: input.height,
            weight: input.weight,
            gender: input.gender,
            activity_level: input.activity_level,
            allergies: input.allergies,
            dietary_preferences: input.dietary_preferences,
            food_dislikes: input.food_dislikes,
            medical_conditions: input.medical_conditions,
            primary_goal: input.primary_goal,
            target_weight: input.target_weight,
        });
        validate_measurements(&patient)?;

        let created = self.patient_repository.create_patient(patient).await?;
        info!("patient {} registered", created.id);

        Ok(created)
    }

    #[instrument(skip(self, identity, input), fields(patient_id = %input.patient_id))]
    async fn update_patient(
        &self,
        identity: Identity,
        input: UpdatePatientInput,
    ) -> Result<Patient, CoreError> {
        let mut patient = self
            .patient_repository
            .get_by_id(input.patient_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_manage_patient(identity, &patient).await,
            "insufficient permissions",
        )?;

        patient.update(input);
        validate_measurements(&patient)?;

        self.patient_repository.update_patient(patient).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_utils::{
        create_patient_input, practitioner, sample_patient, test_service,
    };

    #[tokio::test]
    async fn create_patient_assigns_owner_and_derived_fields() {
        let service = test_service();
        let identity = practitioner();

        let patient = service
            .create_patient(identity.clone(), create_patient_input())
            .await
            .unwrap();

        assert_eq!(patient.practitioner_id, identity.id());
        assert!(patient.bmi.is_some());
        assert!(patient.daily_calorie_needs.is_some());
    }

    #[tokio::test]
    async fn create_patient_rejects_out_of_range_age() {
        let service = test_service();
        let mut input = create_patient_input();
        input.age = Some(0);

        let result = service.create_patient(practitioner(), input).await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn patients_are_private_to_their_practitioner() {
        let owner = practitioner();
        let patient = sample_patient(owner.id());
        let service = test_service().with_patients(vec![patient.clone()]);

        assert!(service.get_patient(owner, patient.id).await.is_ok());
        assert!(matches!(
            service.get_patient(practitioner(), patient.id).await,
            Err(CoreError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn update_patient_recomputes_calories() {
        let owner = practitioner();
        let patient = sample_patient(owner.id());
        let before = patient.daily_calorie_needs;
        let service = test_service().with_patients(vec![patient.clone()]);

        let updated = service
            .update_patient(
                owner,
                UpdatePatientInput {
                    patient_id: patient.id,
                    weight: Some(95.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_ne!(updated.daily_calorie_needs, before);
    }
}
