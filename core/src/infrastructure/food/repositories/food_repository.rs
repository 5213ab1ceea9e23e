use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, Order,
    QueryFilter, QueryOrder, QuerySelect, SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food::{entities::Food, ports::FoodRepository, value_objects::GetFoodsFilter},
    },
    entity::foods::{ActiveModel, Column, Entity},
    infrastructure::food::mappers::map_foods,
};

#[derive(Debug, Clone)]
pub struct PostgresFoodRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(food: &Food) -> ActiveModel {
    ActiveModel {
        id: Set(food.id),
        name: Set(food.name.clone()),
        category: Set(food.category.clone()),
        subcategory: Set(food.subcategory.clone()),
        calories: Set(food.calories),
        protein: Set(food.protein),
        carbohydrates: Set(food.carbohydrates),
        fat: Set(food.fat),
        fiber: Set(food.fiber),
        primary_taste: Set(food.primary_taste.as_str().to_string()),
        secondary_taste: Set(food.secondary_taste.map(|t| t.as_str().to_string())),
        energy: Set(food.energy.as_str().to_string()),
        vata_effect: Set(food.vata_effect.as_str().to_string()),
        pitta_effect: Set(food.pitta_effect.as_str().to_string()),
        kapha_effect: Set(food.kapha_effect.as_str().to_string()),
        is_vegetarian: Set(food.dietary.is_vegetarian),
        is_vegan: Set(food.dietary.is_vegan),
        is_gluten_free: Set(food.dietary.is_gluten_free),
        is_dairy_free: Set(food.dietary.is_dairy_free),
        contains_nuts: Set(food.allergens.contains_nuts),
        contains_soy: Set(food.allergens.contains_soy),
        contains_eggs: Set(food.allergens.contains_eggs),
        contains_fish: Set(food.allergens.contains_fish),
        contains_shellfish: Set(food.allergens.contains_shellfish),
        is_active: Set(food.is_active),
        created_at: Set(food.created_at.fixed_offset()),
        updated_at: Set(food.updated_at.fixed_offset()),
    }
}

/// Food names are unique, so a violated index surfaces as a conflict.
fn write_error(action: &str, sql_err: Option<SqlErr>, e: DbErr) -> CoreError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::Conflict,
        _ => {
            error!("Failed to {} food: {}", action, e);
            CoreError::InternalServerError
        }
    }
}

impl FoodRepository for PostgresFoodRepository {
    async fn fetch_foods(&self, filter: GetFoodsFilter) -> Result<Vec<Food>, CoreError> {
        let mut query = Entity::find();
        let mut condition = Condition::all();

        if !filter.include_inactive {
            condition = condition.add(Column::IsActive.eq(true));
        }

        if let Some(ref category) = filter.category {
            condition = condition.add(Column::Category.eq(category.clone()));
        }

        if let Some(ref categories) = filter.category_in
            && !categories.is_empty()
        {
            condition = condition.add(Column::Category.is_in(categories.clone()));
        }

        if let Some(ref name) = filter.name_like {
            condition = condition.add(Column::Name.contains(name.as_str()));
        }

        if let Some(taste) = filter.primary_taste {
            condition = condition.add(Column::PrimaryTaste.eq(taste.as_str()));
        }

        if let Some(energy) = filter.energy {
            condition = condition.add(Column::Energy.eq(energy.as_str()));
        }

        if let Some(calories_gte) = filter.calories_gte {
            condition = condition.add(Column::Calories.gte(calories_gte));
        }

        if let Some(calories_lte) = filter.calories_lte {
            condition = condition.add(Column::Calories.lte(calories_lte));
        }

        if let Some(is_vegetarian) = filter.is_vegetarian {
            condition = condition.add(Column::IsVegetarian.eq(is_vegetarian));
        }

        if let Some(is_vegan) = filter.is_vegan {
            condition = condition.add(Column::IsVegan.eq(is_vegan));
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
                    "category" => query = query.order_by(Column::Category, order),
                    "calories" => query = query.order_by(Column::Calories, order),
                    "protein" => query = query.order_by(Column::Protein, order),
                    "created_at" => query = query.order_by(Column::CreatedAt, order),
                    _ => {}
                }
            }
        } else {
            query = query.order_by_asc(Column::Name);
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let models = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get foods: {}", e);
            CoreError::InternalServerError
        })?;

        map_foods(models)
    }

    async fn list_active(&self) -> Result<Vec<Food>, CoreError> {
        let models = Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list active foods: {}", e);
                CoreError::InternalServerError
            })?;

        map_foods(models)
    }

    async fn list_active_in_category(
        &self,
        category: String,
        exclude_id: Uuid,
    ) -> Result<Vec<Food>, CoreError> {
        let models = Entity::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::Category.eq(category))
            .filter(Column::Id.ne(exclude_id))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list foods in category: {}", e);
                CoreError::InternalServerError
            })?;

        map_foods(models)
    }

    async fn get_by_id(&self, food_id: Uuid) -> Result<Option<Food>, CoreError> {
        let model = Entity::find_by_id(food_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get food: {}", e);
                CoreError::InternalServerError
            })?;

        model.map(Food::try_from).transpose()
    }

    async fn get_by_ids(&self, food_ids: Vec<Uuid>) -> Result<Vec<Food>, CoreError> {
        if food_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = Entity::find()
            .filter(Column::Id.is_in(food_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get foods by ids: {}", e);
                CoreError::InternalServerError
            })?;

        map_foods(models)
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Food>, CoreError> {
        let model = Entity::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get food by name: {}", e);
                CoreError::InternalServerError
            })?;

        model.map(Food::try_from).transpose()
    }

    async fn create_food(&self, food: Food) -> Result<Food, CoreError> {
        let created = Entity::insert(to_active_model(&food))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| write_error("create", e.sql_err(), e))?;

        Food::try_from(created)
    }

    async fn update_food(&self, food: Food) -> Result<Food, CoreError> {
        let updated = Entity::update(to_active_model(&food))
            .exec(&self.db)
            .await
            .map_err(|e| write_error("update", e.sql_err(), e))?;

        Food::try_from(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_name_violations_become_conflicts() {
        let error = write_error(
            "create",
            Some(SqlErr::UniqueConstraintViolation(
                "duplicate key value violates unique constraint \"foods_name_key\"".to_string(),
            )),
            DbErr::Custom("duplicate key".to_string()),
        );

        assert_eq!(error, CoreError::Conflict);
    }

    #[test]
    fn other_write_failures_stay_internal() {
        let error = write_error("update", None, DbErr::Custom("connection reset".to_string()));

        assert_eq!(error, CoreError::InternalServerError);
    }
}
