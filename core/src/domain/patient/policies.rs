use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        policies::{AahaaraPolicy, Policy},
    },
    patient::{entities::Patient, ports::PatientPolicy},
};

impl PatientPolicy for AahaaraPolicy {
    async fn can_view_patient(
        &self,
        identity: Identity,
        patient: &Patient,
    ) -> Result<bool, CoreError> {
        Ok(self.is_owner(&identity, patient.practitioner_id))
    }

    async fn can_manage_patient(
        &self,
        identity: Identity,
        patient: &Patient,
    ) -> Result<bool, CoreError> {
        Ok(self.is_owner(&identity, patient.practitioner_id))
    }
}
