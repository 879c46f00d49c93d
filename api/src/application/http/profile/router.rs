use super::handlers::{
    get_profile::{__path_get_profile, get_profile},
    upsert_profile::{__path_upsert_profile, upsert_profile},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_profile, upsert_profile))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/users/{{user_id}}/profile", state.args.server.root_path),
        get(get_profile).put(upsert_profile),
    )
}
