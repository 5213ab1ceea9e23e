use sea_orm::prelude::Json;

use crate::{
    domain::{common::entities::app_errors::CoreError, patient::entities::Patient},
    entity::patients,
};

/// JSONB string arrays. Anything that is not an array of strings reads as empty.
pub fn string_list(value: &Json) -> Vec<String> {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

pub fn to_json_list(values: &[String]) -> Json {
    Json::from(values.to_vec())
}

impl TryFrom<&patients::Model> for Patient {
    type Error = CoreError;

    fn try_from(model: &patients::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            practitioner_id: model.practitioner_id,
            name: model.name.clone(),
            constitution: model.constitution.parse()?,
            age: model.age,
            height: model.height,
            weight: model.weight,
            gender: model.gender.parse()?,
            activity_level: model.activity_level.parse()?,
            allergies: string_list(&model.allergies),
            dietary_preferences: string_list(&model.dietary_preferences),
            food_dislikes: string_list(&model.food_dislikes),
            medical_conditions: string_list(&model.medical_conditions),
            primary_goal: model.primary_goal.clone(),
            target_weight: model.target_weight,
            bmi: model.bmi,
            daily_calorie_needs: model.daily_calorie_needs,
            is_active: model.is_active,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

impl TryFrom<patients::Model> for Patient {
    type Error = CoreError;

    fn try_from(model: patients::Model) -> Result<Self, Self::Error> {
        Self::try_from(&model)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn string_list_tolerates_malformed_json() {
        assert_eq!(string_list(&json!(["peanut", "dairy"])), vec!["peanut", "dairy"]);
        assert!(string_list(&json!({"peanut": true})).is_empty());
        assert!(string_list(&Json::Null).is_empty());
    }

    #[test]
    fn to_json_list_writes_an_array() {
        let value = to_json_list(&["ghee".to_string()]);
        assert_eq!(value, json!(["ghee"]));
    }
}
