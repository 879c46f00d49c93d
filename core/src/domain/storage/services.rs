use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    analysis::ports::AnalysisClient,
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    meal::ports::MealRepository,
    profile::ports::ProfileRepository,
    stats::ports::WeeklyStatRepository,
    storage::{
        entities::StorageUsage,
        ports::{MealImageStore, StorageService},
    },
    streak::ports::StreakRepository,
};

impl<P, M, S, W, A, I, CL> StorageService for Service<P, M, S, W, A, I, CL>
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
    async fn get_storage_usage(&self, user_id: Uuid) -> Result<StorageUsage, CoreError> {
        let bytes = self.image_store.storage_size(user_id).await?;

        Ok(StorageUsage { user_id, bytes })
    }
}
