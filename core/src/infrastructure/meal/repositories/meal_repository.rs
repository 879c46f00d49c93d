use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        meal::{entities::MealRecord, ports::MealRepository, value_objects::GetMealsFilter},
    },
    entity::meals::{ActiveModel as MealActiveModel, Column as MealColumn, Entity as MealEntity, Model},
};

#[derive(Debug, Clone)]
pub struct PostgresMealRepository {
    pub db: DatabaseConnection,
}

impl PostgresMealRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_records(models: Vec<Model>) -> Result<Vec<MealRecord>, CoreError> {
    models.into_iter().map(MealRecord::try_from).collect()
}

impl MealRepository for PostgresMealRepository {
    async fn create_meal(&self, meal: MealRecord) -> Result<MealRecord, CoreError> {
        let created = MealEntity::insert(MealActiveModel::from(meal))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create meal: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        MealRecord::try_from(created)
    }

    async fn get_meal(&self, meal_id: Uuid) -> Result<Option<MealRecord>, CoreError> {
        MealEntity::find_by_id(meal_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal: {}", e);
                CoreError::Storage(e.to_string())
            })?
            .map(MealRecord::try_from)
            .transpose()
    }

    async fn get_meals(
        &self,
        user_id: Uuid,
        filter: GetMealsFilter,
    ) -> Result<Vec<MealRecord>, CoreError> {
        let mut query = MealEntity::find().filter(MealColumn::UserId.eq(user_id));

        if let Some(meal_type) = filter.meal_type {
            query = query.filter(MealColumn::MealType.eq(meal_type.as_str()));
        }

        let models = query
            .order_by_desc(MealColumn::LoggedAt)
            .offset(u64::from(filter.offset()))
            .limit(u64::from(filter.limit()))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list meals: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        to_records(models)
    }

    async fn get_meals_in_range(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<MealRecord>, CoreError> {
        let models = MealEntity::find()
            .filter(MealColumn::UserId.eq(user_id))
            .filter(MealColumn::LoggedAt.gte(start.fixed_offset()))
            .filter(MealColumn::LoggedAt.lt(end.fixed_offset()))
            .order_by_asc(MealColumn::LoggedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meals in range: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        to_records(models)
    }

    async fn delete_meal(&self, meal_id: Uuid) -> Result<(), CoreError> {
        let result = MealEntity::delete_by_id(meal_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete meal: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
