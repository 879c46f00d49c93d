use super::handlers::{
    get_current_weekly_stat::{__path_get_current_weekly_stat, get_current_weekly_stat},
    get_daily_analytics::{__path_get_daily_analytics, get_daily_analytics},
    get_daily_totals::{__path_get_daily_totals, get_daily_totals},
    get_weekly_stats::{__path_get_weekly_stats, get_weekly_stats},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_daily_analytics,
    get_daily_totals,
    get_weekly_stats,
    get_current_weekly_stat
))]
pub struct AnalyticsApiDoc;

pub fn analytics_routes(state: AppState) -> Router<AppState> {
    let base = format!(
        "{}/users/{{user_id}}/analytics",
        state.args.server.root_path
    );

    Router::new()
        .route(&format!("{base}/daily"), get(get_daily_analytics))
        .route(&format!("{base}/daily-totals"), get(get_daily_totals))
        .route(&format!("{base}/weekly"), get(get_weekly_stats))
        .route(&format!("{base}/weekly/current"), get(get_current_weekly_stat))
}
