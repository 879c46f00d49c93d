use axum::extract::{Path, State};
use eatup_core::domain::stats::{aggregate::DailyAnalytics, ports::StatsService};
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
    path = "/analytics/daily",
    tag = "analytics",
    summary = "Daily analytics",
    description = "Per meal type averages, totals and recommendations for one calendar day.",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        DateQuery,
    ),
    responses(
        (status = 200, body = DailyAnalytics)
    )
)]
pub async fn get_daily_analytics(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateQuery(query): ValidateQuery<DateQuery>,
) -> Result<Response<DailyAnalytics>, ApiError> {
    let analytics = state
        .service
        .get_daily_analytics(user_id, query.date)
        .await?;

    Ok(Response::OK(analytics))
}
