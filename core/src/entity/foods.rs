use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "foods")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub calories: i32,
    #[sea_orm(column_type = "Double")]
    pub protein: f64,
    #[sea_orm(column_type = "Double")]
    pub carbohydrates: f64,
    #[sea_orm(column_type = "Double")]
    pub fat: f64,
    #[sea_orm(column_type = "Double")]
    pub fiber: f64,
    pub primary_taste: String,
    pub secondary_taste: Option<String>,
    pub energy: String,
    pub vata_effect: String,
    pub pitta_effect: String,
    pub kapha_effect: String,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub is_dairy_free: bool,
    pub contains_nuts: bool,
    pub contains_soy: bool,
    pub contains_eggs: bool,
    pub contains_fish: bool,
    pub contains_shellfish: bool,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meal_items::Entity")]
    MealItems,
    #[sea_orm(has_many = "super::recipes::Entity")]
    Recipes,
}

impl Related<super::meal_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealItems.def()
    }
}

impl Related<super::recipes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
