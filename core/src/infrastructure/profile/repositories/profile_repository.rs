use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        profile::{entities::Profile, ports::ProfileRepository},
    },
    entity::profiles::{ActiveModel as ProfileActiveModel, Column, Entity as ProfileEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProfileRepository for PostgresProfileRepository {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, CoreError> {
        let profile = ProfileEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get profile: {}", e);
                CoreError::Storage(e.to_string())
            })?
            .map(Profile::from);

        Ok(profile)
    }

    async fn upsert_profile(&self, profile: Profile) -> Result<Profile, CoreError> {
        let now = Utc::now().fixed_offset();
        let age = i32::try_from(profile.age)
            .map_err(|_| CoreError::Invalid(format!("age out of range: {}", profile.age)))?;
        let targets = profile.macro_targets;

        let saved = ProfileEntity::insert(ProfileActiveModel {
            user_id: Set(profile.user_id),
            age: Set(age),
            weight: Set(profile.weight),
            height: Set(profile.height),
            gender: Set(profile.gender),
            activity_level: Set(profile.activity_level),
            dietary_restrictions: Set(profile.dietary_restrictions),
            health_goal: Set(profile.health_goal),
            protein_target: Set(targets.map(|t| t.protein)),
            carbs_target: Set(targets.map(|t| t.carbs)),
            fat_target: Set(targets.map(|t| t.fat)),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .on_conflict(
            OnConflict::column(Column::UserId)
                .update_columns([
                    Column::Age,
                    Column::Weight,
                    Column::Height,
                    Column::Gender,
                    Column::ActivityLevel,
                    Column::DietaryRestrictions,
                    Column::HealthGoal,
                    Column::ProteinTarget,
                    Column::CarbsTarget,
                    Column::FatTarget,
                    Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(&self.db)
        .await
        .map(Profile::from)
        .map_err(|e| {
            error!("Failed to upsert profile: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        Ok(saved)
    }
}
