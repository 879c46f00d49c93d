use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    primitives::ByteStream,
};
use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError},
    storage::ports::ObjectStoragePort,
};

/// S3-compatible bucket (MinIO in development).
#[derive(Clone)]
pub struct MinioObjectStorage {
    client: Client,
    bucket: String,
}

impl MinioObjectStorage {
    pub fn new(config: ObjectStorageConfig) -> Self {
        let credentials =
            Credentials::new(&config.access_key, &config.secret_key, None, None, "eatup");

        let endpoint = config.endpoint.trim_end_matches('/');

        tracing::info!(
            endpoint = %endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "Initializing S3 client"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(endpoint)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket,
        }
    }
}

fn error_kind(message: &str) -> &'static str {
    if message.contains("dispatch failure") {
        "dispatch failure, check endpoint URL and network"
    } else if message.contains("timeout") {
        "request timeout"
    } else if message.contains("connection") {
        "connection error"
    } else {
        "unknown"
    }
}

impl ObjectStoragePort for MinioObjectStorage {
    #[instrument(skip(self, payload), fields(bucket = %self.bucket))]
    async fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<(), CoreError> {
        let payload_size = payload.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key)
            .content_type(content_type)
            .body(ByteStream::from(payload))
            .send()
            .await
            .map_err(|e| {
                let message = e.to_string();
                tracing::error!(
                    error = %e,
                    error_kind = error_kind(&message),
                    object_key = %object_key,
                    payload_size,
                    "Failed to upload object"
                );
                CoreError::Storage(format!("failed to upload {object_key}: {message}"))
            })?;

        tracing::debug!(object_key = %object_key, size = payload_size, "Object uploaded");

        Ok(())
    }

    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn delete_object(&self, object_key: &str) -> Result<(), CoreError> {
        // S3 DeleteObject succeeds for missing keys
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(object_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, object_key = %object_key, "Failed to delete object");
                CoreError::Storage(format!("failed to delete {object_key}: {e}"))
            })?;

        tracing::debug!(object_key = %object_key, "Object deleted");

        Ok(())
    }

    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn total_size(&self, prefix: &str) -> Result<u64, CoreError> {
        let mut total: u64 = 0;
        let mut continuation_token: Option<String> = None;

        loop {
            let page = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .prefix(prefix)
                .set_continuation_token(continuation_token.take())
                .send()
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, prefix = %prefix, "Failed to list objects");
                    CoreError::Storage(format!("failed to list {prefix}: {e}"))
                })?;

            total += page
                .contents()
                .iter()
                .filter_map(|object| object.size())
                .map(|size| size.max(0) as u64)
                .sum::<u64>();

            match page.next_continuation_token() {
                Some(token) if page.is_truncated().unwrap_or(false) => {
                    continuation_token = Some(token.to_string());
                }
                _ => break,
            }
        }

        Ok(total)
    }
}
