use axum::extract::{Multipart, Path, State};
use bytes::Bytes;
use eatup_core::domain::meal::{
    entities::MealType,
    ports::MealService,
    value_objects::{LogMealInput, LoggedMeal},
};
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    meal::validators::{normalize_description, validate_image},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

/// Multipart form of a meal upload
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct LogMealForm {
    /// Meal photo, at most 10 MiB
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    pub meal_type: MealType,
    /// What the meal contains, in the user's words
    pub description: Option<String>,
}

#[utoipa::path(
    post,
    path = "/meals",
    tag = "meal",
    summary = "Log a meal",
    description = "Analyze a meal photo, store it with its nutrition analysis and update the user's streak and weekly statistics.",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body(content = LogMealForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, body = LoggedMeal, description = "Meal analyzed and stored"),
        (status = 400, description = "Missing or invalid form field, or image too large"),
        (status = 404, description = "No profile for this user"),
        (status = 422, description = "Analysis could not be interpreted"),
        (status = 502, description = "Analysis service unreachable, safe to retry")
    )
)]
pub async fn log_meal(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<LoggedMeal>, ApiError> {
    let mut image: Option<Bytes> = None;
    let mut meal_type: Option<MealType> = None;
    let mut description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let data = field.bytes().await.map_err(|e| {
                    error!("Failed to read image bytes: {}", e);
                    ApiError::BadRequest(format!("Failed to read image: {}", e))
                })?;
                validate_image(&data).map_err(|message| {
                    warn!(%user_id, bytes = data.len(), "Rejected meal image");
                    ApiError::BadRequest(message)
                })?;
                image = Some(data);
            }
            "meal_type" => {
                let text = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read meal_type: {}", e))
                })?;
                meal_type = Some(text.parse().map_err(ApiError::from)?);
            }
            "description" => {
                let text = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read description: {}", e))
                })?;
                description = Some(text);
            }
            _ => {}
        }
    }

    let image =
        image.ok_or_else(|| ApiError::BadRequest("Missing 'image' field in form".to_string()))?;
    let meal_type = meal_type
        .ok_or_else(|| ApiError::BadRequest("Missing 'meal_type' field in form".to_string()))?;
    let description = normalize_description(description).map_err(ApiError::BadRequest)?;

    let logged = state
        .service
        .log_meal(LogMealInput {
            user_id,
            image,
            description,
            meal_type,
        })
        .await
        .map_err(|e| {
            error!(%user_id, %meal_type, "Failed to log meal: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::Created(logged))
}
