use std::future::Future;

use bytes::Bytes;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    storage::entities::{MealImagePaths, StorageUsage},
};

/// Key/value blob storage (local directory, MinIO/S3).
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Deleting a missing object succeeds
    fn delete_object(&self, object_key: &str)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Total bytes stored under `prefix`
    fn total_size(&self, prefix: &str) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

/// Compressed meal photo + thumbnail files.
#[cfg_attr(test, mockall::automock)]
pub trait MealImageStore: Send + Sync {
    /// Writes both files. Either both exist afterwards or neither does.
    fn store_meal_images(
        &self,
        user_id: Uuid,
        image: Bytes,
    ) -> impl Future<Output = Result<MealImagePaths, CoreError>> + Send;

    fn delete_meal_images(
        &self,
        paths: MealImagePaths,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn storage_size(&self, user_id: Uuid) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait StorageService: Send + Sync {
    fn get_storage_usage(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<StorageUsage, CoreError>> + Send;
}
