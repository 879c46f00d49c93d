use super::handlers::{
    get_streak::{__path_get_streak, get_streak},
    get_upload_days::{__path_get_upload_days, get_upload_days},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_streak, get_upload_days))]
pub struct StreakApiDoc;

pub fn streak_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users/{{user_id}}/streak", state.args.server.root_path),
            get(get_streak),
        )
        .route(
            &format!("{}/users/{{user_id}}/upload-days", state.args.server.root_path),
            get(get_upload_days),
        )
}
