use axum::extract::{Path, State};
use eatup_core::domain::meal::{entities::MealRecord, ports::MealService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/meals/{meal_id}",
    tag = "meal",
    summary = "Get a meal",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("meal_id" = Uuid, Path, description = "Meal id"),
    ),
    responses(
        (status = 200, body = MealRecord),
        (status = 404, description = "Meal not found")
    )
)]
pub async fn get_meal(
    Path((user_id, meal_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<MealRecord>, ApiError> {
    let meal = state.service.get_meal(user_id, meal_id).await?;

    Ok(Response::OK(meal))
}
