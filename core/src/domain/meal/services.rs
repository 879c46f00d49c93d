use chrono::{DateTime, NaiveDate, Utc};
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    analysis::{
        parser::parse_analysis_response,
        ports::{AnalysisClient, PromptService},
    },
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    meal::{
        display::render_display_text,
        entities::{MealRecord, MealRecordConfig, MealType},
        ports::{MealRepository, MealService},
        value_objects::{GetMealsFilter, LogMealInput, LoggedMeal},
    },
    profile::ports::ProfileRepository,
    stats::ports::WeeklyStatRepository,
    storage::{entities::MealImagePaths, ports::MealImageStore},
    streak::ports::StreakRepository,
};

impl<P, M, S, W, A, I, CL> MealService for Service<P, M, S, W, A, I, CL>
where
    P: ProfileRepository,
    M: MealRepository,
    S: StreakRepository,
    W: WeeklyStatRepository,
    A: AnalysisClient,
    I: MealImageStore,
    CL: Clock,
{
    #[instrument(
        skip(self, input),
        fields(user_id = %input.user_id, meal_type = %input.meal_type, image_bytes = input.image.len())
    )]
    async fn log_meal(&self, input: LogMealInput) -> Result<LoggedMeal, CoreError> {
        let LogMealInput {
            user_id,
            image,
            description,
            meal_type,
        } = input;

        // 1. Prompt (fails fast on a missing profile, before any network call)
        let prompt = self
            .build_analysis_prompt(user_id, meal_type, description)
            .await?;

        // 2. Remote analysis
        let raw_response = self
            .analysis_client
            .analyze_meal_image(prompt, image.clone())
            .await?;

        // 3. Decode and validate
        let analysis = parse_analysis_response(&raw_response)?;
        analysis.validate_scores()?;

        // 4. Images before the record, never the other way round
        let paths = self
            .image_store
            .store_meal_images(user_id, image)
            .await?;

        // 5. Record
        let now = self.clock.now();
        let today = self.calendar.day_of(now);
        let meal = MealRecord::new(MealRecordConfig {
            user_id,
            logged_at: now,
            meal_type,
            image_path: paths.image_path.clone(),
            thumbnail_path: paths.thumbnail_path.clone(),
            week_number: self.calendar.iso_week_number(today),
            analysis: analysis.clone(),
        });

        let meal = match self.meal_repository.create_meal(meal).await {
            Ok(meal) => meal,
            Err(e) => {
                tracing::error!("Failed to save meal record: {}", e);
                if let Err(cleanup) = self.image_store.delete_meal_images(paths).await {
                    tracing::warn!("Failed to remove images of unsaved meal: {}", cleanup);
                }
                return Err(e);
            }
        };

        tracing::info!(meal_id = %meal.id, health_score = meal.health_score, "Meal logged");

        // 6. Streak and weekly stat, best-effort
        self.update_aggregates_after_upload(user_id, today).await;

        // 7. Summary
        let display_text = render_display_text(&analysis, meal_type);

        Ok(LoggedMeal {
            analysis,
            display_text,
            meal,
        })
    }

    #[instrument(skip(self))]
    async fn get_meal(&self, user_id: Uuid, meal_id: Uuid) -> Result<MealRecord, CoreError> {
        self.meal_repository
            .get_meal(meal_id)
            .await?
            .filter(|meal| meal.user_id == user_id)
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn get_meals(
        &self,
        user_id: Uuid,
        filter: GetMealsFilter,
    ) -> Result<Vec<MealRecord>, CoreError> {
        self.meal_repository.get_meals(user_id, filter).await
    }

    #[instrument(skip(self))]
    async fn get_meals_between(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<MealRecord>, CoreError> {
        if end < start {
            return Err(CoreError::Invalid("end is before start".to_string()));
        }

        self.meal_repository
            .get_meals_in_range(user_id, start, end)
            .await
    }

    #[instrument(skip(self))]
    async fn get_meals_by_type(
        &self,
        user_id: Uuid,
        meal_type: MealType,
        limit: Option<u32>,
    ) -> Result<Vec<MealRecord>, CoreError> {
        let filter = GetMealsFilter {
            meal_type: Some(meal_type),
            limit,
            offset: None,
        };

        self.meal_repository.get_meals(user_id, filter).await
    }

    #[instrument(skip(self))]
    async fn get_todays_meals(&self, user_id: Uuid) -> Result<Vec<MealRecord>, CoreError> {
        let today = self.calendar.day_of(self.clock.now());
        let (start, end) = self.calendar.day_bounds(today)?;

        self.meal_repository
            .get_meals_in_range(user_id, start, end)
            .await
    }

    #[instrument(skip(self))]
    async fn get_todays_meals_by_type(
        &self,
        user_id: Uuid,
        meal_type: MealType,
    ) -> Result<Vec<MealRecord>, CoreError> {
        let meals = self.get_todays_meals(user_id).await?;

        Ok(meals
            .into_iter()
            .filter(|meal| meal.meal_type == meal_type)
            .collect())
    }

    #[instrument(skip(self))]
    async fn delete_meal(&self, user_id: Uuid, meal_id: Uuid) -> Result<(), CoreError> {
        let meal = MealService::get_meal(self, user_id, meal_id).await?;

        self.image_store
            .delete_meal_images(MealImagePaths {
                image_path: meal.image_path.clone(),
                thumbnail_path: meal.thumbnail_path.clone(),
            })
            .await?;
        self.meal_repository.delete_meal(meal.id).await?;
        tracing::info!(meal_id = %meal.id, "Meal deleted");

        let day = self.calendar.day_of(meal.logged_at);
        let _guard = self.user_locks.lock(user_id).await;
        let refreshed = match self.calendar.week_start(day) {
            Ok(week_start) => self.refresh_weekly_stats_from(user_id, week_start).await,
            Err(e) => Err(e),
        };
        if let Err(e) = refreshed {
            tracing::error!(%user_id, %day, "Failed to refresh weekly stats: {}", e);
        }

        Ok(())
    }
}

impl<P, M, S, W, A, I, CL> Service<P, M, S, W, A, I, CL>
where
    M: MealRepository,
    S: StreakRepository,
    W: WeeklyStatRepository,
    CL: Clock,
{
    /// Streak and weekly stat updates for an upload on `day`. Failures are
    /// logged and swallowed, the meal is already stored.
    async fn update_aggregates_after_upload(&self, user_id: Uuid, day: NaiveDate) {
        let _guard = self.user_locks.lock(user_id).await;

        if let Err(e) = self.record_upload(user_id, day).await {
            let e = CoreError::Aggregation(e.to_string());
            tracing::error!(%user_id, "Failed to update streak: {}", e);
        }

        let refreshed = match self.calendar.week_start(day) {
            Ok(week_start) => self.refresh_weekly_stat(user_id, week_start).await,
            Err(e) => Err(e),
        };
        if let Err(e) = refreshed {
            let e = CoreError::Aggregation(e.to_string());
            tracing::error!(%user_id, %day, "Failed to update weekly stat: {}", e);
        }
    }
}
