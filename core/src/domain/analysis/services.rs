use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    analysis::{
        ports::{AnalysisClient, PromptService},
        prompt::{PromptInput, render_analysis_prompt},
    },
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    meal::{entities::MealType, ports::MealRepository},
    profile::ports::ProfileRepository,
    stats::{aggregate::NutrientAverages, ports::WeeklyStatRepository},
    storage::ports::MealImageStore,
    streak::ports::StreakRepository,
};

impl<P, M, S, W, A, I, CL> PromptService for Service<P, M, S, W, A, I, CL>
where
    P: ProfileRepository,
    M: MealRepository,
    S: StreakRepository,
    W: WeeklyStatRepository,
    A: AnalysisClient,
    I: MealImageStore,
    CL: Clock,
{
    #[instrument(skip(self, description))]
    async fn build_analysis_prompt(
        &self,
        user_id: Uuid,
        meal_type: MealType,
        description: Option<String>,
    ) -> Result<String, CoreError> {
        let profile = self
            .profile_repository
            .get_profile(user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let today = self.calendar.day_of(self.clock.now());
        let (start, end) = self.calendar.week_bounds(self.calendar.week_start(today)?)?;
        let week_meals = self
            .meal_repository
            .get_meals_in_range(user_id, start, end)
            .await?;
        let past_meals = NutrientAverages::of(&week_meals);

        Ok(render_analysis_prompt(&PromptInput {
            profile: &profile,
            meal_type,
            description: description.as_deref(),
            past_meals: past_meals.as_ref(),
        }))
    }
}
