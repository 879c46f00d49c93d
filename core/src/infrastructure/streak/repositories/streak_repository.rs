use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        streak::{entities::UserStreakState, ports::StreakRepository},
    },
    entity::user_streaks::{ActiveModel as StreakActiveModel, Column, Entity as StreakEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresStreakRepository {
    pub db: DatabaseConnection,
}

impl PostgresStreakRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl StreakRepository for PostgresStreakRepository {
    async fn get_streak(&self, user_id: Uuid) -> Result<Option<UserStreakState>, CoreError> {
        let streak = StreakEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get streak: {}", e);
                CoreError::Storage(e.to_string())
            })?
            .map(UserStreakState::from);

        Ok(streak)
    }

    async fn save_streak(&self, state: UserStreakState) -> Result<UserStreakState, CoreError> {
        let saved = StreakEntity::insert(StreakActiveModel {
            user_id: Set(state.user_id),
            current_streak: Set(i32::try_from(state.current_streak).unwrap_or(i32::MAX)),
            longest_streak: Set(i32::try_from(state.longest_streak).unwrap_or(i32::MAX)),
            last_upload_date: Set(state.last_upload_date),
            updated_at: Set(Utc::now().fixed_offset()),
        })
        .on_conflict(
            OnConflict::column(Column::UserId)
                .update_columns([
                    Column::CurrentStreak,
                    Column::LongestStreak,
                    Column::LastUploadDate,
                    Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(&self.db)
        .await
        .map(UserStreakState::from)
        .map_err(|e| {
            error!("Failed to save streak: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        Ok(saved)
    }
}
