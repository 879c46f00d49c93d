use crate::application::http::{
    analytics::router::AnalyticsApiDoc,
    health::__path_health,
    meal::router::MealApiDoc,
    profile::router::ProfileApiDoc,
    storage::router::StorageApiDoc,
    streak::router::StreakApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EatUp API",
        description = "Meal photo nutrition analysis, upload streaks and weekly statistics"
    ),
    paths(health),
    nest(
        (path = "/users/{user_id}", api = MealApiDoc),
        (path = "/users/{user_id}", api = AnalyticsApiDoc),
        (path = "/users/{user_id}", api = StreakApiDoc),
        (path = "/users/{user_id}", api = ProfileApiDoc),
        (path = "/users/{user_id}", api = StorageApiDoc),
    )
)]
pub struct ApiDoc;
