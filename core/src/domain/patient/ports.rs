use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    patient::{
        entities::Patient,
        value_objects::{CreatePatientInput, GetPatientsFilter, UpdatePatientInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait PatientService: Send + Sync {
    fn get_patients(
        &self,
        identity: Identity,
        filter: GetPatientsFilter,
    ) -> impl Future<Output = Result<Vec<Patient>, CoreError>> + Send;

    fn get_patient(
        &self,
        identity: Identity,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Patient, CoreError>> + Send;

    fn create_patient(
        &self,
        identity: Identity,
        input: CreatePatientInput,
    ) -> impl Future<Output = Result<Patient, CoreError>> + Send;

    fn update_patient(
        &self,
        identity: Identity,
        input: UpdatePatientInput,
    ) -> impl Future<Output = Result<Patient, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PatientRepository: Send + Sync {
    fn fetch_patients_by_practitioner(
        &self,
        practitioner_id: Uuid,
        filter: GetPatientsFilter,
    ) -> impl Future<Output = Result<Vec<Patient>, CoreError>> + Send;

    fn get_by_id(
        &self,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Patient>, CoreError>> + Send;

    /// Every patient of the practitioner, inactive ones included.
    fn count_by_practitioner(
        &self,
        practitioner_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn create_patient(
        &self,
        patient: Patient,
    ) -> impl Future<Output = Result<Patient, CoreError>> + Send;

    fn update_patient(
        &self,
        patient: Patient,
    ) -> impl Future<Output = Result<Patient, CoreError>> + Send;
}

pub trait PatientPolicy: Send + Sync {
    fn can_view_patient(
        &self,
        identity: Identity,
        patient: &Patient,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_manage_patient(
        &self,
        identity: Identity,
        patient: &Patient,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
