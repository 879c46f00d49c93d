use axum::extract::{Path, State};
use eatup_core::domain::meal::{
    entities::MealRecord, ports::MealService, value_objects::GetMealsFilter,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    meal::validators::GetMealsQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response, validated::ValidateQuery},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct GetMealsResponse {
    pub items: Vec<MealRecord>,
    pub offset: u32,
    pub limit: u32,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/meals",
    tag = "meal",
    summary = "List meals",
    description = "Meals of the user, newest first.",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        GetMealsQuery,
    ),
    responses(
        (status = 200, body = GetMealsResponse),
        (status = 400, description = "Invalid query")
    )
)]
pub async fn get_meals(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateQuery(query): ValidateQuery<GetMealsQuery>,
) -> Result<Response<GetMealsResponse>, ApiError> {
    let filter = GetMealsFilter {
        meal_type: query.meal_type,
        limit: query.limit,
        offset: query.offset,
    };
    let (offset, limit) = (filter.offset(), filter.limit());

    let items = state.service.get_meals(user_id, filter).await?;

    Ok(Response::OK(GetMealsResponse {
        count: items.len(),
        items,
        offset,
        limit,
    }))
}
