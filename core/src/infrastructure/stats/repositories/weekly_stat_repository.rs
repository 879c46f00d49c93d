use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        stats::{entities::WeeklyStat, ports::WeeklyStatRepository},
    },
    entity::weekly_stats::{
        ActiveModel as WeeklyStatActiveModel, Column, Entity as WeeklyStatEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresWeeklyStatRepository {
    pub db: DatabaseConnection,
}

impl PostgresWeeklyStatRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl WeeklyStatRepository for PostgresWeeklyStatRepository {
    async fn get_weekly_stat(
        &self,
        user_id: Uuid,
        week_start: NaiveDate,
    ) -> Result<Option<WeeklyStat>, CoreError> {
        WeeklyStatEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::WeekStartDate.eq(week_start))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get weekly stat: {}", e);
                CoreError::Storage(e.to_string())
            })?
            .map(WeeklyStat::try_from)
            .transpose()
    }

    async fn get_weekly_stats(&self, user_id: Uuid) -> Result<Vec<WeeklyStat>, CoreError> {
        WeeklyStatEntity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::WeekStartDate)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list weekly stats: {}", e);
                CoreError::Storage(e.to_string())
            })?
            .into_iter()
            .map(WeeklyStat::try_from)
            .collect()
    }

    async fn upsert_weekly_stat(&self, stat: WeeklyStat) -> Result<WeeklyStat, CoreError> {
        let saved = WeeklyStatEntity::insert(WeeklyStatActiveModel::from(stat))
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::WeekStartDate])
                    .update_columns([
                        Column::WeekEndDate,
                        Column::TotalMeals,
                        Column::AverageProtein,
                        Column::AverageCarbs,
                        Column::AverageFat,
                        Column::AverageFiber,
                        Column::AverageSugar,
                        Column::AverageSodium,
                        Column::AverageHealthScore,
                        Column::AveragePortionQualityScore,
                        Column::AverageVarietyScore,
                        Column::AverageNutritionBalanceScore,
                        Column::ProteinPercent,
                        Column::CarbsPercent,
                        Column::FatPercent,
                        Column::BestMealId,
                        Column::WorstMealId,
                        Column::WeeklyTrend,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert weekly stat: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        WeeklyStat::try_from(saved)
    }

    async fn delete_weekly_stat(&self, user_id: Uuid, week_start: NaiveDate) -> Result<(), CoreError> {
        WeeklyStatEntity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::WeekStartDate.eq(week_start))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete weekly stat: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(())
    }
}
