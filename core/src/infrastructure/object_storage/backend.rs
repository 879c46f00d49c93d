use bytes::Bytes;

use crate::domain::{
    common::{ImageStorageConfig, entities::app_errors::CoreError},
    storage::ports::ObjectStoragePort,
};

use super::{LocalObjectStorage, MinioObjectStorage};

/// Image storage selected at startup from configuration.
#[derive(Clone)]
pub enum ImageBackend {
    Local(LocalObjectStorage),
    S3(MinioObjectStorage),
}

impl ImageBackend {
    pub fn from_config(config: ImageStorageConfig) -> Self {
        match config {
            ImageStorageConfig::Local(local) => {
                tracing::info!(root_dir = %local.root_dir, "Storing meal images on disk");
                ImageBackend::Local(LocalObjectStorage::new(local.root_dir))
            }
            ImageStorageConfig::S3(s3) => ImageBackend::S3(MinioObjectStorage::new(s3)),
        }
    }
}

impl ObjectStoragePort for ImageBackend {
    async fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<(), CoreError> {
        match self {
            ImageBackend::Local(storage) => {
                storage.put_object(object_key, payload, content_type).await
            }
            ImageBackend::S3(storage) => storage.put_object(object_key, payload, content_type).await,
        }
    }

    async fn delete_object(&self, object_key: &str) -> Result<(), CoreError> {
        match self {
            ImageBackend::Local(storage) => storage.delete_object(object_key).await,
            ImageBackend::S3(storage) => storage.delete_object(object_key).await,
        }
    }

    async fn total_size(&self, prefix: &str) -> Result<u64, CoreError> {
        match self {
            ImageBackend::Local(storage) => storage.total_size(prefix).await,
            ImageBackend::S3(storage) => storage.total_size(prefix).await,
        }
    }
}
