use axum::extract::{Path, State};
use eatup_core::domain::profile::{entities::Profile, ports::ProfileService};
use uuid::Uuid;

use crate::application::http::{
    profile::validators::UpsertProfileRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response, validated::ValidateJson},
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/profile",
    tag = "profile",
    summary = "Create or replace profile",
    description = "Registers the information meal analysis is personalized with.",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, body = Profile),
        (status = 400, description = "Invalid profile")
    )
)]
pub async fn upsert_profile(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(request): ValidateJson<UpsertProfileRequest>,
) -> Result<Response<Profile>, ApiError> {
    let profile = state
        .service
        .save_profile(request.into_profile(user_id))
        .await?;

    Ok(Response::OK(profile))
}
