use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meal_plans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub diet_chart_id: Uuid,
    pub day_number: i32,
    pub meal_type: String,
    pub meal_time: Time,
    pub target_calories: i32,
    #[sea_orm(column_type = "Double")]
    pub target_protein: f64,
    #[sea_orm(column_type = "Double")]
    pub target_carbs: f64,
    #[sea_orm(column_type = "Double")]
    pub target_fat: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::diet_charts::Entity",
        from = "Column::DietChartId",
        to = "super::diet_charts::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    DietCharts,
    #[sea_orm(has_many = "super::meal_items::Entity")]
    MealItems,
}

impl Related<super::diet_charts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DietCharts.def()
    }
}

impl Related<super::meal_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
