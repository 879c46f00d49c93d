use axum::extract::{Path, State};
use chrono::NaiveDate;
use eatup_core::domain::streak::ports::StreakService;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response, validated::ValidateQuery},
        app_state::AppState,
    },
    streak::validators::UploadDaysQuery,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadDaysResponse {
    #[schema(value_type = Vec<String>, format = Date)]
    pub days: Vec<NaiveDate>,
}

#[utoipa::path(
    get,
    path = "/upload-days",
    tag = "streak",
    summary = "Days with uploads",
    description = "Calendar days between `start` and `end` (both inclusive) with at least one logged meal.",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        UploadDaysQuery,
    ),
    responses(
        (status = 200, body = UploadDaysResponse),
        (status = 400, description = "Invalid range")
    )
)]
pub async fn get_upload_days(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateQuery(query): ValidateQuery<UploadDaysQuery>,
) -> Result<Response<UploadDaysResponse>, ApiError> {
    let days = state
        .service
        .get_days_with_uploads(user_id, query.start, query.end)
        .await?;

    Ok(Response::OK(UploadDaysResponse { days }))
}
