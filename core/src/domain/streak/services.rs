use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    analysis::ports::AnalysisClient,
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    meal::ports::MealRepository,
    profile::ports::ProfileRepository,
    stats::ports::WeeklyStatRepository,
    storage::ports::MealImageStore,
    streak::{
        entities::{StreakTransition, UserStats, UserStreakState},
        ports::{StreakRepository, StreakService},
    },
};

impl<P, M, S, W, A, I, CL> StreakService for Service<P, M, S, W, A, I, CL>
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
    async fn get_user_stats(&self, user_id: Uuid) -> Result<UserStats, CoreError> {
        let state = self
            .streak_repository
            .get_streak(user_id)
            .await?
            .unwrap_or_else(|| UserStreakState::empty(user_id));

        Ok(state.into())
    }

    #[instrument(skip(self))]
    async fn get_days_with_uploads(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, CoreError> {
        if end < start {
            return Err(CoreError::Invalid("end is before start".to_string()));
        }

        let from = self.calendar.start_of_day(start)?;
        let (_, until) = self.calendar.day_bounds(end)?;
        let meals = self
            .meal_repository
            .get_meals_in_range(user_id, from, until)
            .await?;

        let days: BTreeSet<NaiveDate> = meals
            .iter()
            .map(|meal| self.calendar.day_of(meal.logged_at))
            .collect();

        Ok(days.into_iter().collect())
    }
}

impl<P, M, S, W, A, I, CL> Service<P, M, S, W, A, I, CL>
where
    S: StreakRepository,
{
    /// Applies an upload on `day` to the stored streak. Callers hold the
    /// user's lock.
    pub(crate) async fn record_upload(
        &self,
        user_id: Uuid,
        day: NaiveDate,
    ) -> Result<UserStreakState, CoreError> {
        let current = self
            .streak_repository
            .get_streak(user_id)
            .await?
            .unwrap_or_else(|| UserStreakState::empty(user_id));

        let (next, transition) = current.record_upload(day);
        if transition == StreakTransition::AlreadyCounted {
            tracing::debug!(%user_id, "Already uploaded today, streak unchanged");
            return Ok(next);
        }

        let saved = self.streak_repository.save_streak(next).await?;
        tracing::info!(
            %user_id,
            ?transition,
            current_streak = saved.current_streak,
            longest_streak = saved.longest_streak,
            "Streak updated"
        );

        Ok(saved)
    }
}
