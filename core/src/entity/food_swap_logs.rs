use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_swap_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub meal_item_id: Uuid,
    pub practitioner_id: Uuid,
    pub original_food_id: Uuid,
    pub new_food_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub swap_reason: String,
    #[sea_orm(column_type = "Double")]
    pub similarity_score: f64,
    pub ai_model_used: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub alternative_suggestions: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meal_items::Entity",
        from = "Column::MealItemId",
        to = "super::meal_items::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    MealItems,
}

impl Related<super::meal_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
