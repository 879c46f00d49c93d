use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    analysis::ports::AnalysisClient,
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    meal::ports::MealRepository,
    profile::{
        entities::Profile,
        ports::{ProfileRepository, ProfileService},
    },
    stats::ports::WeeklyStatRepository,
    storage::ports::MealImageStore,
    streak::ports::StreakRepository,
};

impl<P, M, S, W, A, I, CL> ProfileService for Service<P, M, S, W, A, I, CL>
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
    async fn get_profile(&self, user_id: Uuid) -> Result<Profile, CoreError> {
        self.profile_repository
            .get_profile(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, profile), fields(user_id = %profile.user_id))]
    async fn save_profile(&self, profile: Profile) -> Result<Profile, CoreError> {
        profile.validate()?;

        let saved = self.profile_repository.upsert_profile(profile).await?;
        tracing::info!(user_id = %saved.user_id, "Profile saved");

        Ok(saved)
    }
}
