use chrono::NaiveDate;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    analysis::ports::AnalysisClient,
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    meal::ports::MealRepository,
    profile::ports::ProfileRepository,
    stats::{
        aggregate::{
            DailyAnalytics, DailyTotals, NutrientAverages, WeeklyStatInput, build_weekly_stat,
        },
        entities::WeeklyStat,
        ports::{StatsService, WeeklyStatRepository},
    },
    storage::ports::MealImageStore,
    streak::ports::StreakRepository,
};

impl<P, M, S, W, A, I, CL> StatsService for Service<P, M, S, W, A, I, CL>
where
    P: ProfileRepository,
    M: MealRepository,
    S: StreakRepository,
    W: WeeklyStatRepository,
    A: AnalysisClient,
    I: MealImageStore,
    CL: Clock,
{
    #[instrument(skip(self))]
    async fn get_daily_analytics(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<DailyAnalytics, CoreError> {
        let (start, end) = self.calendar.day_bounds(date)?;
        let meals = self
            .meal_repository
            .get_meals_in_range(user_id, start, end)
            .await?;

        Ok(DailyAnalytics::of(date, &meals))
    }

    #[instrument(skip(self))]
    async fn get_daily_totals(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<DailyTotals, CoreError> {
        let (start, end) = self.calendar.day_bounds(date)?;
        let meals = self
            .meal_repository
            .get_meals_in_range(user_id, start, end)
            .await?;

        Ok(DailyTotals::of(date, &meals))
    }

    #[instrument(skip(self))]
    async fn get_weekly_stat(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<WeeklyStat, CoreError> {
        let week_start = self.calendar.week_start(date)?;
        self.weekly_stat_repository
            .get_weekly_stat(user_id, week_start)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn get_current_weekly_stat(&self, user_id: Uuid) -> Result<WeeklyStat, CoreError> {
        let today = self.calendar.day_of(self.clock.now());
        StatsService::get_weekly_stat(self, user_id, today).await
    }

    #[instrument(skip(self))]
    async fn get_all_weekly_stats(&self, user_id: Uuid) -> Result<Vec<WeeklyStat>, CoreError> {
        self.weekly_stat_repository.get_weekly_stats(user_id).await
    }
}

impl<P, M, S, W, A, I, CL> Service<P, M, S, W, A, I, CL>
where
    M: MealRepository,
    W: WeeklyStatRepository,
    CL: Clock,
{
    /// Recomputes the stat row of the week starting on `week_start` from the
    /// stored meals, removing it when the week has none. Callers hold the
    /// user's lock.
    pub(crate) async fn refresh_weekly_stat(
        &self,
        user_id: Uuid,
        week_start: NaiveDate,
    ) -> Result<Option<WeeklyStat>, CoreError> {
        let (start, end) = self.calendar.week_bounds(week_start)?;
        let meals = self
            .meal_repository
            .get_meals_in_range(user_id, start, end)
            .await?;

        let existing = self
            .weekly_stat_repository
            .get_weekly_stat(user_id, week_start)
            .await?;

        if meals.is_empty() {
            if existing.is_some() {
                self.weekly_stat_repository
                    .delete_weekly_stat(user_id, week_start)
                    .await?;
                tracing::info!(%user_id, %week_start, "Weekly stat removed, no meals left");
            }
            return Ok(None);
        }

        let previous_start = self.calendar.shift_weeks(week_start, -1)?;
        let (previous_from, previous_until) = self.calendar.week_bounds(previous_start)?;
        let previous_meals = self
            .meal_repository
            .get_meals_in_range(user_id, previous_from, previous_until)
            .await?;

        let stat = build_weekly_stat(WeeklyStatInput {
            user_id,
            week_start,
            meals: &meals,
            previous_week_health: NutrientAverages::of(&previous_meals).map(|a| a.health_score),
            existing_id: existing.map(|stat| stat.id),
            computed_at: self.clock.now(),
        });

        let Some(stat) = stat else {
            return Ok(None);
        };

        let saved = self.weekly_stat_repository.upsert_weekly_stat(stat).await?;
        tracing::info!(
            %user_id,
            %week_start,
            total_meals = saved.total_meals,
            trend = %saved.weekly_trend,
            "Weekly stat updated"
        );

        Ok(Some(saved))
    }

    /// The trend of a week depends on the week before it, so a change to
    /// `week_start` also recomputes the following week's row when one is
    /// stored. Callers hold the user's lock.
    pub(crate) async fn refresh_weekly_stats_from(
        &self,
        user_id: Uuid,
        week_start: NaiveDate,
    ) -> Result<(), CoreError> {
        self.refresh_weekly_stat(user_id, week_start).await?;

        let next_start = self.calendar.shift_weeks(week_start, 1)?;
        let next_is_stored = self
            .weekly_stat_repository
            .get_weekly_stat(user_id, next_start)
            .await?
            .is_some();
        if next_is_stored {
            self.refresh_weekly_stat(user_id, next_start).await?;
        }

        Ok(())
    }
}
