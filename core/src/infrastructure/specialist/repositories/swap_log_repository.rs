use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait, sea_query::Expr,
};
use tracing::{error, warn};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        diet_chart::entities::MealItem,
        specialist::{
            entities::FoodSwapLog, ports::SwapLogRepository, value_objects::GetSwapLogsFilter,
        },
    },
    entity::{
        food_swap_logs::{ActiveModel, Column, Entity},
        meal_items::{Column as ItemColumn, Entity as ItemEntity},
    },
    infrastructure::{
        diet_chart::repositories::diet_chart_repository::to_item_active_model,
        patient::mappers::to_json_list,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresSwapLogRepository {
    pub db: DatabaseConnection,
}

impl PostgresSwapLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SwapLogRepository for PostgresSwapLogRepository {
    async fn record_swap(
        &self,
        previous_item_id: Uuid,
        replacement: MealItem,
        log: FoodSwapLog,
    ) -> Result<(MealItem, FoodSwapLog), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let retired = ItemEntity::update_many()
            .col_expr(ItemColumn::IsCurrent, Expr::value(false))
            .col_expr(ItemColumn::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(ItemColumn::Id.eq(previous_item_id))
            .filter(ItemColumn::IsCurrent.eq(true))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to retire meal item: {}", e);
                CoreError::InternalServerError
            })?;

        // Someone else swapped the item first.
        if retired.rows_affected == 0 {
            warn!("meal item {} is no longer current", previous_item_id);
            return Err(CoreError::Conflict);
        }

        let item = ItemEntity::insert(to_item_active_model(&replacement))
            .exec_with_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create replacement meal item: {}", e);
                CoreError::InternalServerError
            })?;

        let log_model = ActiveModel {
            id: Set(log.id),
            meal_item_id: Set(log.meal_item_id),
            practitioner_id: Set(log.practitioner_id),
            original_food_id: Set(log.original_food_id),
            new_food_id: Set(log.new_food_id),
            swap_reason: Set(log.swap_reason.clone()),
            similarity_score: Set(log.similarity_score),
            ai_model_used: Set(log.ai_model_used.clone()),
            alternative_suggestions: Set(to_json_list(&log.alternative_suggestions)),
            created_at: Set(log.created_at.fixed_offset()),
        };

        let created_log = Entity::insert(log_model)
            .exec_with_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create food swap log: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit food swap: {}", e);
            CoreError::InternalServerError
        })?;

        Ok((MealItem::from(item), FoodSwapLog::from(created_log)))
    }

    async fn fetch_logs_by_practitioner(
        &self,
        practitioner_id: Uuid,
        filter: GetSwapLogsFilter,
    ) -> Result<Vec<FoodSwapLog>, CoreError> {
        let mut condition = Condition::all().add(Column::PractitionerId.eq(practitioner_id));

        if let Some(meal_item_id) = filter.meal_item_id {
            condition = condition.add(Column::MealItemId.eq(meal_item_id));
        }

        if let Some(original_food_id) = filter.original_food_id {
            condition = condition.add(Column::OriginalFoodId.eq(original_food_id));
        }

        if let Some(new_food_id) = filter.new_food_id {
            condition = condition.add(Column::NewFoodId.eq(new_food_id));
        }

        let mut query = Entity::find()
            .filter(condition)
            .order_by_desc(Column::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let models = query.all(&self.db).await.map_err(|e| {
            error!("Failed to get food swap logs: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(models.iter().map(FoodSwapLog::from).collect())
    }

    async fn count_by_practitioner(&self, practitioner_id: Uuid) -> Result<u64, CoreError> {
        Entity::find()
            .filter(Column::PractitionerId.eq(practitioner_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count food swap logs: {}", e);
                CoreError::InternalServerError
            })
    }
}
