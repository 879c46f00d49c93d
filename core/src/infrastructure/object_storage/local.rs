use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
};

use bytes::Bytes;
use tracing::instrument;

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::ObjectStoragePort};

/// Objects as files under a root directory; keys are relative paths.
#[derive(Debug, Clone)]
pub struct LocalObjectStorage {
    root: PathBuf,
}

impl LocalObjectStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, object_key: &str) -> Result<PathBuf, CoreError> {
        let relative = Path::new(object_key);
        let is_plain = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));

        if object_key.is_empty() || !is_plain {
            return Err(CoreError::Invalid(format!("invalid object key: {object_key}")));
        }

        Ok(self.root.join(relative))
    }
}

fn storage_error(action: &str, path: &Path, e: std::io::Error) -> CoreError {
    tracing::error!(path = %path.display(), "Failed to {}: {}", action, e);
    CoreError::Storage(format!("failed to {action} {}: {e}", path.display()))
}

impl ObjectStoragePort for LocalObjectStorage {
    #[instrument(skip(self, payload))]
    async fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        _content_type: &str,
    ) -> Result<(), CoreError> {
        let path = self.resolve(object_key)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("create directory", parent, e))?;
        }

        tokio::fs::write(&path, &payload)
            .await
            .map_err(|e| storage_error("write", &path, e))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_object(&self, object_key: &str) -> Result<(), CoreError> {
        let path = self.resolve(object_key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("delete", &path, e)),
        }
    }

    #[instrument(skip(self))]
    async fn total_size(&self, prefix: &str) -> Result<u64, CoreError> {
        let directory = self.resolve(prefix.trim_end_matches('/'))?;
        let mut pending = vec![directory];
        let mut total = 0;

        while let Some(directory) = pending.pop() {
            let mut entries = match tokio::fs::read_dir(&directory).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(storage_error("list", &directory, e)),
            };

            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| storage_error("list", &directory, e))?
            {
                let metadata = entry
                    .metadata()
                    .await
                    .map_err(|e| storage_error("stat", &entry.path(), e))?;
                if metadata.is_dir() {
                    pending.push(entry.path());
                } else {
                    total += metadata.len();
                }
            }
        }

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_sizes_and_deletes_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalObjectStorage::new(dir.path());

        storage
            .put_object("users/a/1.jpg", Bytes::from_static(b"12345"), "image/jpeg")
            .await
            .unwrap();
        storage
            .put_object("users/a/1_thumb.jpg", Bytes::from_static(b"123"), "image/jpeg")
            .await
            .unwrap();
        storage
            .put_object("users/b/1.jpg", Bytes::from_static(b"1234567"), "image/jpeg")
            .await
            .unwrap();

        assert!(dir.path().join("users/a/1.jpg").exists());
        assert_eq!(storage.total_size("users/a/").await.unwrap(), 8);

        storage.delete_object("users/a/1.jpg").await.unwrap();
        assert!(!dir.path().join("users/a/1.jpg").exists());
        assert_eq!(storage.total_size("users/a/").await.unwrap(), 3);

        // missing objects and prefixes are fine
        storage.delete_object("users/a/1.jpg").await.unwrap();
        assert_eq!(storage.total_size("users/nobody/").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn rejects_keys_escaping_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalObjectStorage::new(dir.path());

        for key in ["../evil.jpg", "/etc/passwd", "users/../../x", ""] {
            assert!(matches!(
                storage
                    .put_object(key, Bytes::from_static(b"x"), "image/jpeg")
                    .await,
                Err(CoreError::Invalid(_))
            ));
        }
    }
}
