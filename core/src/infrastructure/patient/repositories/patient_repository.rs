use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        patient::{entities::Patient, ports::PatientRepository, value_objects::GetPatientsFilter},
    },
    entity::patients::{ActiveModel, Column, Entity},
    infrastructure::patient::mappers::to_json_list,
};

#[derive(Debug, Clone)]
pub struct PostgresPatientRepository {
    pub db: DatabaseConnection,
}

impl PostgresPatientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(patient: &Patient) -> ActiveModel {
    ActiveModel {
        id: Set(patient.id),
        practitioner_id: Set(patient.practitioner_id),
        name: Set(patient.name.clone()),
        constitution: Set(patient.constitution.as_str().to_string()),
        age: Set(patient.age),
        height: Set(patient.height),
        weight: Set(patient.weight),
        gender: Set(patient.gender.as_str().to_string()),
        activity_level: Set(patient.activity_level.as_str().to_string()),
        allergies: Set(to_json_list(&patient.allergies)),
        dietary_preferences: Set(to_json_list(&patient.dietary_preferences)),
        food_dislikes: Set(to_json_list(&patient.food_dislikes)),
        medical_conditions: Set(to_json_list(&patient.medical_conditions)),
        primary_goal: Set(patient.primary_goal.clone()),
        target_weight: Set(patient.target_weight),
        bmi: Set(patient.bmi),
        daily_calorie_needs: Set(patient.daily_calorie_needs),
        is_active: Set(patient.is_active),
        created_at: Set(patient.created_at.fixed_offset()),
        updated_at: Set(patient.updated_at.fixed_offset()),
    }
}

impl PatientRepository for PostgresPatientRepository {
    async fn fetch_patients_by_practitioner(
        &self,
        practitioner_id: Uuid,
        filter: GetPatientsFilter,
    ) -> Result<Vec<Patient>, CoreError> {
        let mut query = Entity::find().filter(Column::PractitionerId.eq(practitioner_id));
        let mut condition = Condition::all();

        if !filter.include_inactive {
            condition = condition.add(Column::IsActive.eq(true));
        }

        if let Some(ref name) = filter.name_like {
            condition = condition.add(Column::Name.contains(name.as_str()));
        }

        if let Some(constitution) = filter.constitution {
            condition = condition.add(Column::Constitution.eq(constitution.as_str()));
        }

        query = query.filter(condition);

        if let Some(ref sort_str) = filter.sort {
            for sort_part in sort_str.split(',') {
                let sort_part = sort_part.trim();
                let (field, order) = match sort_part.strip_prefix('-') {
                    Some(field) => (field, Order::Desc),
                    None => (sort_part, Order::Asc),
                };
                match field {
                    "name" => query = query.order_by(Column::Name, order),
                    "created_at" => query = query.order_by(Column::CreatedAt, order),
                    "updated_at" => query = query.order_by(Column::UpdatedAt, order),
                    _ => {}
                }
            }
        } else {
            query = query.order_by_desc(Column::CreatedAt);
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let models = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get patients: {}", e);
            CoreError::InternalServerError
        })?;

        models.iter().map(Patient::try_from).collect()
    }

    async fn get_by_id(&self, patient_id: Uuid) -> Result<Option<Patient>, CoreError> {
        let model = Entity::find_by_id(patient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get patient: {}", e);
                CoreError::InternalServerError
            })?;

        model.map(Patient::try_from).transpose()
    }

    async fn count_by_practitioner(&self, practitioner_id: Uuid) -> Result<u64, CoreError> {
        Entity::find()
            .filter(Column::PractitionerId.eq(practitioner_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count patients: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn create_patient(&self, patient: Patient) -> Result<Patient, CoreError> {
        let created = Entity::insert(to_active_model(&patient))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create patient: {}", e);
                CoreError::InternalServerError
            })?;

        Patient::try_from(created)
    }

    async fn update_patient(&self, patient: Patient) -> Result<Patient, CoreError> {
        let updated = Entity::update(to_active_model(&patient))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update patient: {}", e);
                CoreError::InternalServerError
            })?;

        Patient::try_from(updated)
    }
}
