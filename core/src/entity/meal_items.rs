use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meal_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub meal_plan_id: Uuid,
    pub food_id: Uuid,
    #[sea_orm(column_type = "Double")]
    pub quantity: f64,
    pub serving_size: String,
    pub calories: i32,
    #[sea_orm(column_type = "Double")]
    pub protein: f64,
    #[sea_orm(column_type = "Double")]
    pub carbohydrates: f64,
    #[sea_orm(column_type = "Double")]
    pub fat: f64,
    #[sea_orm(column_type = "Double")]
    pub fiber: f64,
    pub is_ai_generated: bool,
    #[sea_orm(column_type = "Double", nullable)]
    pub ai_confidence_score: Option<f64>,
    pub swapped_from_id: Option<Uuid>,
    #[sea_orm(column_type = "Text")]
    pub swap_reason: String,
    pub is_current: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meal_plans::Entity",
        from = "Column::MealPlanId",
        to = "super::meal_plans::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    MealPlans,
    #[sea_orm(
        belongs_to = "super::foods::Entity",
        from = "Column::FoodId",
        to = "super::foods::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Foods,
}

impl Related<super::meal_plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealPlans.def()
    }
}

impl Related<super::foods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Foods.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
