use std::future::Future;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, profile::entities::Profile};

/// Profile lookups, read-only from the analysis pipeline's point of view
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn get_profile(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Profile>, CoreError>> + Send;

    fn upsert_profile(
        &self,
        profile: Profile,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProfileService: Send + Sync {
    fn get_profile(&self, user_id: Uuid)
    -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn save_profile(&self, profile: Profile)
    -> impl Future<Output = Result<Profile, CoreError>> + Send;
}
