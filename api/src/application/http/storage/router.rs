use super::handlers::get_storage_usage::{__path_get_storage_usage, get_storage_usage};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_storage_usage))]
pub struct StorageApiDoc;

pub fn storage_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/users/{{user_id}}/storage", state.args.server.root_path),
        get(get_storage_usage),
    )
}
