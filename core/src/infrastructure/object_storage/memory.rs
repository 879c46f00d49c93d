use std::{collections::BTreeMap, sync::Arc};

use bytes::Bytes;
use tokio::sync::RwLock;

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::ObjectStoragePort};

/// Objects kept in a map. Clones share the same objects.
#[derive(Debug, Clone, Default)]
pub struct InMemoryObjectStorage {
    objects: Arc<RwLock<BTreeMap<String, Bytes>>>,
    fail_suffix: Option<String>,
}

impl InMemoryObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose writes fail for keys ending in `suffix`
    pub fn failing_on(suffix: impl Into<String>) -> Self {
        Self {
            objects: Arc::default(),
            fail_suffix: Some(suffix.into()),
        }
    }

    pub async fn keys(&self) -> Vec<String> {
        self.objects.read().await.keys().cloned().collect()
    }

    pub async fn get(&self, object_key: &str) -> Option<Bytes> {
        self.objects.read().await.get(object_key).cloned()
    }
}

impl ObjectStoragePort for InMemoryObjectStorage {
    async fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        _content_type: &str,
    ) -> Result<(), CoreError> {
        if let Some(suffix) = &self.fail_suffix {
            if object_key.ends_with(suffix.as_str()) {
                return Err(CoreError::Storage(format!("write refused: {object_key}")));
            }
        }

        self.objects
            .write()
            .await
            .insert(object_key.to_string(), payload);
        Ok(())
    }

    async fn delete_object(&self, object_key: &str) -> Result<(), CoreError> {
        self.objects.write().await.remove(object_key);
        Ok(())
    }

    async fn total_size(&self, prefix: &str) -> Result<u64, CoreError> {
        let objects = self.objects.read().await;

        Ok(objects
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(_, payload)| payload.len() as u64)
            .sum())
    }
}
