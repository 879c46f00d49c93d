use axum::extract::{Path, State};
use eatup_core::domain::stats::{aggregate::DailyTotals, ports::StatsService};
use uuid::Uuid;

use crate::application::http::{
    analytics::validators::DateQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response, validated::ValidateQuery},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/analytics/daily-totals",
    tag = "analytics",
    summary = "Daily totals",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        DateQuery,
    ),
    responses(
        (status = 200, body = DailyTotals)
    )
)]
pub async fn get_daily_totals(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateQuery(query): ValidateQuery<DateQuery>,
) -> Result<Response<DailyTotals>, ApiError> {
    let totals = state.service.get_daily_totals(user_id, query.date).await?;

    Ok(Response::OK(totals))
}
