use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal::{entities::MealRecord, ports::MealRepository, value_objects::GetMealsFilter},
    profile::{entities::Profile, ports::ProfileRepository},
    stats::{entities::WeeklyStat, ports::WeeklyStatRepository},
    streak::{entities::UserStreakState, ports::StreakRepository},
};

#[derive(Debug, Default)]
struct State {
    profiles: HashMap<Uuid, Profile>,
    meals: HashMap<Uuid, MealRecord>,
    streaks: HashMap<Uuid, UserStreakState>,
    weekly_stats: HashMap<(Uuid, NaiveDate), WeeklyStat>,
}

/// Every record port backed by maps behind one lock. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
    fail_meal_writes: Arc<AtomicBool>,
    fail_streak_writes: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `create_meal` fail with a storage error until reset
    pub fn fail_meal_writes(&self, fail: bool) {
        self.fail_meal_writes.store(fail, Ordering::SeqCst);
    }

    /// Makes `save_streak` fail with a storage error until reset
    pub fn fail_streak_writes(&self, fail: bool) {
        self.fail_streak_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn meal_count(&self) -> usize {
        self.state.read().await.meals.len()
    }
}

impl ProfileRepository for InMemoryStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, CoreError> {
        Ok(self.state.read().await.profiles.get(&user_id).cloned())
    }

    async fn upsert_profile(&self, profile: Profile) -> Result<Profile, CoreError> {
        self.state
            .write()
            .await
            .profiles
            .insert(profile.user_id, profile.clone());
        Ok(profile)
    }
}

impl MealRepository for InMemoryStore {
    async fn create_meal(&self, meal: MealRecord) -> Result<MealRecord, CoreError> {
        if self.fail_meal_writes.load(Ordering::SeqCst) {
            return Err(CoreError::Storage("meal writes are disabled".to_string()));
        }

        self.state.write().await.meals.insert(meal.id, meal.clone());
        Ok(meal)
    }

    async fn get_meal(&self, meal_id: Uuid) -> Result<Option<MealRecord>, CoreError> {
        Ok(self.state.read().await.meals.get(&meal_id).cloned())
    }

    async fn get_meals(
        &self,
        user_id: Uuid,
        filter: GetMealsFilter,
    ) -> Result<Vec<MealRecord>, CoreError> {
        let state = self.state.read().await;
        let mut meals: Vec<MealRecord> = state
            .meals
            .values()
            .filter(|meal| meal.user_id == user_id)
            .filter(|meal| filter.meal_type.is_none_or(|t| meal.meal_type == t))
            .cloned()
            .collect();

        meals.sort_by(|a, b| b.logged_at.cmp(&a.logged_at).then(b.id.cmp(&a.id)));

        Ok(meals
            .into_iter()
            .skip(filter.offset() as usize)
            .take(filter.limit() as usize)
            .collect())
    }

    async fn get_meals_in_range(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<MealRecord>, CoreError> {
        let state = self.state.read().await;
        let mut meals: Vec<MealRecord> = state
            .meals
            .values()
            .filter(|meal| meal.user_id == user_id)
            .filter(|meal| meal.logged_at >= start && meal.logged_at < end)
            .cloned()
            .collect();

        meals.sort_by(|a, b| a.logged_at.cmp(&b.logged_at).then(a.id.cmp(&b.id)));

        Ok(meals)
    }

    async fn delete_meal(&self, meal_id: Uuid) -> Result<(), CoreError> {
        self.state
            .write()
            .await
            .meals
            .remove(&meal_id)
            .map(|_| ())
            .ok_or(CoreError::NotFound)
    }
}

impl StreakRepository for InMemoryStore {
    async fn get_streak(&self, user_id: Uuid) -> Result<Option<UserStreakState>, CoreError> {
        Ok(self.state.read().await.streaks.get(&user_id).cloned())
    }

    async fn save_streak(&self, state: UserStreakState) -> Result<UserStreakState, CoreError> {
        if self.fail_streak_writes.load(Ordering::SeqCst) {
            return Err(CoreError::Storage("streak writes are disabled".to_string()));
        }

        self.state
            .write()
            .await
            .streaks
            .insert(state.user_id, state.clone());
        Ok(state)
    }
}

impl WeeklyStatRepository for InMemoryStore {
    async fn get_weekly_stat(
        &self,
        user_id: Uuid,
        week_start: NaiveDate,
    ) -> Result<Option<WeeklyStat>, CoreError> {
        Ok(self
            .state
            .read()
            .await
            .weekly_stats
            .get(&(user_id, week_start))
            .cloned())
    }

    async fn get_weekly_stats(&self, user_id: Uuid) -> Result<Vec<WeeklyStat>, CoreError> {
        let state = self.state.read().await;
        let mut stats: Vec<WeeklyStat> = state
            .weekly_stats
            .values()
            .filter(|stat| stat.user_id == user_id)
            .cloned()
            .collect();

        stats.sort_by(|a, b| b.week_start_date.cmp(&a.week_start_date));
        Ok(stats)
    }

    async fn upsert_weekly_stat(&self, stat: WeeklyStat) -> Result<WeeklyStat, CoreError> {
        let mut state = self.state.write().await;
        let key = (stat.user_id, stat.week_start_date);

        // the first row's id wins, as with ON CONFLICT (user_id, week_start_date)
        let stat = match state.weekly_stats.get(&key) {
            Some(existing) => WeeklyStat {
                id: existing.id,
                ..stat
            },
            None => stat,
        };

        state.weekly_stats.insert(key, stat.clone());
        Ok(stat)
    }

    async fn delete_weekly_stat(&self, user_id: Uuid, week_start: NaiveDate) -> Result<(), CoreError> {
        self.state
            .write()
            .await
            .weekly_stats
            .remove(&(user_id, week_start));
        Ok(())
    }
}
