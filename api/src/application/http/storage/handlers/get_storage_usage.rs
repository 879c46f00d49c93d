use axum::extract::{Path, State};
use eatup_core::domain::storage::{entities::StorageUsage, ports::StorageService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/storage",
    tag = "storage",
    summary = "Image storage usage",
    description = "Bytes of meal photos and thumbnails stored for the user.",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = StorageUsage)
    )
)]
pub async fn get_storage_usage(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<StorageUsage>, ApiError> {
    let usage = state.service.get_storage_usage(user_id).await?;

    Ok(Response::OK(usage))
}
