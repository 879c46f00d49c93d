use bytes::Bytes;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_uuid_v7},
        storage::{
            entities::{JPEG_CONTENT_TYPE, MealImagePaths, user_prefix},
            ports::{MealImageStore, ObjectStoragePort},
        },
    },
    infrastructure::media::jpeg::spawn_compress_meal_image,
};

/// Meal photos compressed to JPEG and written to an object store.
#[derive(Debug, Clone)]
pub struct ObjectMealImageStore<OS> {
    storage: OS,
}

impl<OS> ObjectMealImageStore<OS> {
    pub fn new(storage: OS) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &OS {
        &self.storage
    }
}

impl<OS> MealImageStore for ObjectMealImageStore<OS>
where
    OS: ObjectStoragePort,
{
    #[instrument(skip(self, image), fields(image_bytes = image.len()))]
    async fn store_meal_images(
        &self,
        user_id: Uuid,
        image: Bytes,
    ) -> Result<MealImagePaths, CoreError> {
        let compressed = spawn_compress_meal_image(image).await?;
        let paths = MealImagePaths::for_image(user_id, generate_uuid_v7());

        self.storage
            .put_object(&paths.image_path, compressed.full, JPEG_CONTENT_TYPE)
            .await?;

        if let Err(e) = self
            .storage
            .put_object(&paths.thumbnail_path, compressed.thumbnail, JPEG_CONTENT_TYPE)
            .await
        {
            if let Err(cleanup) = self.storage.delete_object(&paths.image_path).await {
                tracing::warn!(
                    object_key = %paths.image_path,
                    "Failed to remove image after thumbnail write failed: {}",
                    cleanup
                );
            }
            return Err(e);
        }

        tracing::debug!(image_path = %paths.image_path, "Meal images stored");

        Ok(paths)
    }

    #[instrument(skip(self))]
    async fn delete_meal_images(&self, paths: MealImagePaths) -> Result<(), CoreError> {
        self.storage.delete_object(&paths.image_path).await?;
        self.storage.delete_object(&paths.thumbnail_path).await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn storage_size(&self, user_id: Uuid) -> Result<u64, CoreError> {
        self.storage.total_size(&user_prefix(user_id)).await
    }
}
