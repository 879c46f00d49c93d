use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    streak::entities::{UserStats, UserStreakState},
};

#[cfg_attr(test, mockall::automock)]
pub trait StreakRepository: Send + Sync {
    fn get_streak(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserStreakState>, CoreError>> + Send;

    fn save_streak(
        &self,
        state: UserStreakState,
    ) -> impl Future<Output = Result<UserStreakState, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait StreakService: Send + Sync {
    /// Stored counters plus an encouragement message. A user who never
    /// uploaded gets zeros.
    fn get_user_stats(&self, user_id: Uuid)
    -> impl Future<Output = Result<UserStats, CoreError>> + Send;

    /// Sorted distinct calendar days in `[start, end]` with at least one meal.
    fn get_days_with_uploads(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Future<Output = Result<Vec<NaiveDate>, CoreError>> + Send;
}
