use std::collections::HashMap;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, Statement, TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        diet_chart::{
            entities::{ChartCounts, ChartStatus, DietChart, MealItem, MealPlan},
            ports::DietChartRepository,
        },
    },
    entity::{
        diet_charts::{ActiveModel, Column, Entity},
        meal_items::{
            ActiveModel as ItemActiveModel, Column as ItemColumn, Entity as ItemEntity,
        },
        meal_plans::{
            ActiveModel as PlanActiveModel, Column as PlanColumn, Entity as PlanEntity,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PostgresDietChartRepository {
    pub db: DatabaseConnection,
}

impl PostgresDietChartRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(chart: &DietChart) -> ActiveModel {
    ActiveModel {
        id: Set(chart.id),
        patient_id: Set(chart.patient_id),
        practitioner_id: Set(chart.practitioner_id),
        title: Set(chart.title.clone()),
        description: Set(chart.description.clone()),
        status: Set(chart.status.as_str().to_string()),
        duration_days: Set(chart.duration_days),
        generated_by_ai: Set(chart.generated_by_ai),
        ai_model_used: Set(chart.ai_model_used.clone()),
        generation_notes: Set(chart.generation_notes.clone()),
        created_at: Set(chart.created_at.fixed_offset()),
        updated_at: Set(chart.updated_at.fixed_offset()),
    }
}

fn to_plan_active_model(plan: &MealPlan) -> PlanActiveModel {
    PlanActiveModel {
        id: Set(plan.id),
        diet_chart_id: Set(plan.diet_chart_id),
        day_number: Set(plan.day_number),
        meal_type: Set(plan.meal_type.as_str().to_string()),
        meal_time: Set(plan.meal_time),
        target_calories: Set(plan.target_calories),
        target_protein: Set(plan.target_protein),
        target_carbs: Set(plan.target_carbs),
        target_fat: Set(plan.target_fat),
        created_at: Set(plan.created_at.fixed_offset()),
        updated_at: Set(plan.updated_at.fixed_offset()),
    }
}

pub(crate) fn to_item_active_model(item: &MealItem) -> ItemActiveModel {
    ItemActiveModel {
        id: Set(item.id),
        meal_plan_id: Set(item.meal_plan_id),
        food_id: Set(item.food_id),
        quantity: Set(item.quantity),
        serving_size: Set(item.serving_size.clone()),
        calories: Set(item.calories),
        protein: Set(item.protein),
        carbohydrates: Set(item.carbohydrates),
        fat: Set(item.fat),
        fiber: Set(item.fiber),
        is_ai_generated: Set(item.is_ai_generated),
        ai_confidence_score: Set(item.ai_confidence_score),
        swapped_from_id: Set(item.swapped_from_id),
        swap_reason: Set(item.swap_reason.clone()),
        is_current: Set(item.is_current),
        created_at: Set(item.created_at.fixed_offset()),
        updated_at: Set(item.updated_at.fixed_offset()),
    }
}

async fn insert_day<C: ConnectionTrait>(conn: &C, plans: &[MealPlan]) -> Result<(), CoreError> {
    PlanEntity::insert_many(plans.iter().map(to_plan_active_model))
        .exec(conn)
        .await
        .map_err(|e| {
            error!("Failed to create meal plans: {}", e);
            CoreError::InternalServerError
        })?;

    let items: Vec<ItemActiveModel> = plans
        .iter()
        .flat_map(|plan| plan.items.iter().map(to_item_active_model))
        .collect();

    if !items.is_empty() {
        ItemEntity::insert_many(items).exec(conn).await.map_err(|e| {
            error!("Failed to create meal items: {}", e);
            CoreError::InternalServerError
        })?;
    }

    Ok(())
}

impl DietChartRepository for PostgresDietChartRepository {
    async fn create_chart(&self, chart: DietChart) -> Result<DietChart, CoreError> {
        let created = Entity::insert(to_active_model(&chart))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create diet chart: {}", e);
                CoreError::InternalServerError
            })?;

        DietChart::try_from(created)
    }

    async fn save_day(&self, plans: Vec<MealPlan>) -> Result<Vec<MealPlan>, CoreError> {
        if plans.is_empty() {
            return Ok(plans);
        }

        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        // Dropping the transaction without commit rolls the whole day back.
        insert_day(&txn, &plans).await?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit meal plans: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(plans)
    }

    async fn get_chart(&self, chart_id: Uuid) -> Result<Option<DietChart>, CoreError> {
        let model = Entity::find_by_id(chart_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get diet chart: {}", e);
                CoreError::InternalServerError
            })?;

        model.map(DietChart::try_from).transpose()
    }

    async fn list_charts_by_patient(&self, patient_id: Uuid) -> Result<Vec<DietChart>, CoreError> {
        let models = Entity::find()
            .filter(Column::PatientId.eq(patient_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list diet charts: {}", e);
                CoreError::InternalServerError
            })?;

        models.iter().map(DietChart::try_from).collect()
    }

    async fn list_recent_charts(
        &self,
        practitioner_id: Uuid,
        limit: u64,
    ) -> Result<Vec<DietChart>, CoreError> {
        let models = Entity::find()
            .filter(Column::PractitionerId.eq(practitioner_id))
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recent diet charts: {}", e);
                CoreError::InternalServerError
            })?;

        models.iter().map(DietChart::try_from).collect()
    }

    async fn count_charts_by_practitioner(
        &self,
        practitioner_id: Uuid,
    ) -> Result<ChartCounts, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              COUNT(*) AS total,
              COUNT(*) FILTER (WHERE status = $2) AS active
            FROM diet_charts
            WHERE practitioner_id = $1
            "#,
            [practitioner_id.into(), ChartStatus::Active.as_str().into()],
        );

        let row = self.db.query_one(stmt).await.map_err(|e| {
            error!("Failed to count diet charts: {}", e);
            CoreError::InternalServerError
        })?;

        let count = |column: &str| {
            row.as_ref()
                .and_then(|row| row.try_get::<i64>("", column).ok())
                .unwrap_or(0)
                .max(0) as u64
        };

        Ok(ChartCounts {
            total: count("total"),
            active: count("active"),
        })
    }

    async fn get_meal_plans(&self, chart_id: Uuid) -> Result<Vec<MealPlan>, CoreError> {
        let plan_models = PlanEntity::find()
            .filter(PlanColumn::DietChartId.eq(chart_id))
            .order_by_asc(PlanColumn::DayNumber)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal plans: {}", e);
                CoreError::InternalServerError
            })?;

        let mut plans = plan_models
            .iter()
            .map(MealPlan::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        // meal_type is stored as text, so the day order comes from the enum.
        plans.sort_by_key(|plan| (plan.day_number, plan.meal_type));

        let plan_ids: Vec<Uuid> = plans.iter().map(|plan| plan.id).collect();
        let item_models = if !plan_ids.is_empty() {
            ItemEntity::find()
                .filter(ItemColumn::MealPlanId.is_in(plan_ids))
                .filter(ItemColumn::IsCurrent.eq(true))
                .order_by_asc(ItemColumn::CreatedAt)
                .all(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to get meal items: {}", e);
                    CoreError::InternalServerError
                })?
        } else {
            Vec::new()
        };

        let mut items_by_plan: HashMap<Uuid, Vec<MealItem>> = HashMap::new();
        for model in item_models {
            items_by_plan
                .entry(model.meal_plan_id)
                .or_default()
                .push(MealItem::from(model));
        }

        for plan in &mut plans {
            plan.items = items_by_plan.remove(&plan.id).unwrap_or_default();
        }

        Ok(plans)
    }

    async fn get_meal_plan(&self, meal_plan_id: Uuid) -> Result<Option<MealPlan>, CoreError> {
        let model = PlanEntity::find_by_id(meal_plan_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal plan: {}", e);
                CoreError::InternalServerError
            })?;

        model.as_ref().map(MealPlan::try_from).transpose()
    }

    async fn get_meal_item(&self, item_id: Uuid) -> Result<Option<MealItem>, CoreError> {
        let model = ItemEntity::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(MealItem::from))
    }

    async fn update_chart(&self, chart: DietChart) -> Result<DietChart, CoreError> {
        let updated = Entity::update(to_active_model(&chart))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update diet chart: {}", e);
                CoreError::InternalServerError
            })?;

        DietChart::try_from(updated)
    }
}
