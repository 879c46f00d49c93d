use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";

/// Object keys of a meal's full image and thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealImagePaths {
    pub image_path: String,
    pub thumbnail_path: String,
}

impl MealImagePaths {
    /// `users/{user_id}/{image_id}.jpg` and `users/{user_id}/{image_id}_thumb.jpg`
    pub fn for_image(user_id: Uuid, image_id: Uuid) -> Self {
        let prefix = user_prefix(user_id);
        Self {
            image_path: format!("{prefix}{image_id}.jpg"),
            thumbnail_path: format!("{prefix}{image_id}_thumb.jpg"),
        }
    }
}

/// Namespace holding every file of one user
pub fn user_prefix(user_id: Uuid) -> String {
    format!("users/{user_id}/")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct StorageUsage {
    pub user_id: Uuid,
    pub bytes: u64,
}
