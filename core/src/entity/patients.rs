use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "patients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub practitioner_id: Uuid,
    pub name: String,
    pub constitution: String,
    pub age: Option<i32>,
    #[sea_orm(column_type = "Double", nullable)]
    pub height: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub weight: Option<f64>,
    pub gender: String,
    pub activity_level: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub allergies: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub dietary_preferences: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub food_dislikes: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub medical_conditions: Json,
    pub primary_goal: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub target_weight: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub bmi: Option<f64>,
    pub daily_calorie_needs: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::diet_charts::Entity")]
    DietCharts,
}

impl Related<super::diet_charts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DietCharts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
