use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub food_id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub ingredients: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub instructions: Json,
    pub cooking_time: String,
    pub difficulty: String,
    pub servings: i32,
    #[sea_orm(column_type = "Double")]
    pub calories_per_serving: f64,
    #[sea_orm(column_type = "Double")]
    pub protein_per_serving: f64,
    #[sea_orm(column_type = "Double")]
    pub carbs_per_serving: f64,
    #[sea_orm(column_type = "Double")]
    pub fat_per_serving: f64,
    #[sea_orm(column_type = "Text")]
    pub ayurvedic_benefits: String,
    pub best_time_to_eat: String,
    #[sea_orm(column_type = "Text")]
    pub seasonal_notes: String,
    #[sea_orm(column_type = "Text")]
    pub dosha_considerations: String,
    #[sea_orm(column_type = "Text")]
    pub cooking_tips: String,
    #[sea_orm(column_type = "Text")]
    pub variations: String,
    #[sea_orm(column_type = "Text")]
    pub storage_instructions: String,
    #[sea_orm(column_type = "Text")]
    pub video_url: String,
    pub created_by: Uuid,
    pub is_public: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::foods::Entity",
        from = "Column::FoodId",
        to = "super::foods::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Foods,
}

impl Related<super::foods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Foods.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
