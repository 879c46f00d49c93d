use axum::extract::{Path, State};
use eatup_core::domain::stats::{entities::WeeklyStat, ports::StatsService};
use uuid::Uuid;

use crate::application::http::{
    analytics::validators::WeekQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response, validated::ValidateQuery},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/analytics/weekly",
    tag = "analytics",
    summary = "Weekly statistics",
    description = "Every stored week, newest first, or only the week containing `date`.",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        WeekQuery,
    ),
    responses(
        (status = 200, body = Vec<WeeklyStat>),
        (status = 404, description = "No statistics for the requested week")
    )
)]
pub async fn get_weekly_stats(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateQuery(query): ValidateQuery<WeekQuery>,
) -> Result<Response<Vec<WeeklyStat>>, ApiError> {
    let stats = match query.date {
        Some(date) => vec![state.service.get_weekly_stat(user_id, date).await?],
        None => state.service.get_all_weekly_stats(user_id).await?,
    };

    Ok(Response::OK(stats))
}
