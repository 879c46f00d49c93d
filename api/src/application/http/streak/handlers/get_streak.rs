use axum::extract::{Path, State};
use eatup_core::domain::streak::{entities::UserStats, ports::StreakService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/streak",
    tag = "streak",
    summary = "Upload streak",
    description = "Current and longest daily upload streak with an encouragement message.",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = UserStats)
    )
)]
pub async fn get_streak(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<UserStats>, ApiError> {
    let stats = state.service.get_user_stats(user_id).await?;

    Ok(Response::OK(stats))
}
