use axum::extract::{Path, State};
use eatup_core::domain::meal::ports::MealService;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/meals/{meal_id}",
    tag = "meal",
    summary = "Delete a meal",
    description = "Removes the meal, its images, and recomputes the weekly statistics of its week. The streak is left unchanged.",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("meal_id" = Uuid, Path, description = "Meal id"),
    ),
    responses(
        (status = 204, description = "Meal deleted"),
        (status = 404, description = "Meal not found")
    )
)]
pub async fn delete_meal(
    Path((user_id, meal_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state.service.delete_meal(user_id, meal_id).await.map_err(|e| {
        tracing::error!(%user_id, %meal_id, "Failed to delete meal: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::NoContent)
}
