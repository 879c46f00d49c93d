use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    stats::{
        aggregate::{DailyAnalytics, DailyTotals},
        entities::WeeklyStat,
    },
};

/// One row per (user, week start).
#[cfg_attr(test, mockall::automock)]
pub trait WeeklyStatRepository: Send + Sync {
    fn get_weekly_stat(
        &self,
        user_id: Uuid,
        week_start: NaiveDate,
    ) -> impl Future<Output = Result<Option<WeeklyStat>, CoreError>> + Send;

    /// Newest week first
    fn get_weekly_stats(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<WeeklyStat>, CoreError>> + Send;

    fn upsert_weekly_stat(
        &self,
        stat: WeeklyStat,
    ) -> impl Future<Output = Result<WeeklyStat, CoreError>> + Send;

    fn delete_weekly_stat(
        &self,
        user_id: Uuid,
        week_start: NaiveDate,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait StatsService: Send + Sync {
    fn get_daily_analytics(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<DailyAnalytics, CoreError>> + Send;

    fn get_daily_totals(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<DailyTotals, CoreError>> + Send;

    /// Stat of the week containing `date`
    fn get_weekly_stat(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<WeeklyStat, CoreError>> + Send;

    fn get_current_weekly_stat(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<WeeklyStat, CoreError>> + Send;

    fn get_all_weekly_stats(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<WeeklyStat>, CoreError>> + Send;
}
