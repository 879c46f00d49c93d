use axum::extract::{Path, State};
use eatup_core::domain::profile::{entities::Profile, ports::ProfileService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/profile",
    tag = "profile",
    summary = "Get profile",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = Profile),
        (status = 404, description = "No profile for this user")
    )
)]
pub async fn get_profile(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Profile>, ApiError> {
    let profile = state.service.get_profile(user_id).await?;

    Ok(Response::OK(profile))
}
