use super::{
    handlers::{
        delete_meal::{__path_delete_meal, delete_meal},
        get_meal::{__path_get_meal, get_meal},
        get_meals::{__path_get_meals, get_meals},
        log_meal::{__path_log_meal, log_meal},
    },
    validators::MAX_UPLOAD_BODY_BYTES,
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(log_meal, get_meals, get_meal, delete_meal))]
pub struct MealApiDoc;

pub fn meal_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users/{{user_id}}/meals", state.args.server.root_path),
            post(log_meal)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_BYTES))
                .get(get_meals),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/meals/{{meal_id}}",
                state.args.server.root_path
            ),
            get(get_meal).delete(delete_meal),
        )
}
