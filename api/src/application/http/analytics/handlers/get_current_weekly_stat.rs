use axum::extract::{Path, State};
use eatup_core::domain::stats::{entities::WeeklyStat, ports::StatsService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/analytics/weekly/current",
    tag = "analytics",
    summary = "Current week statistics",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = WeeklyStat),
        (status = 404, description = "No meals logged this week")
    )
)]
pub async fn get_current_weekly_stat(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<WeeklyStat>, ApiError> {
    let stat = state.service.get_current_weekly_stat(user_id).await?;

    Ok(Response::OK(stat))
}
