pub mod get_current_weekly_stat;
pub mod get_daily_analytics;
pub mod get_daily_totals;
pub mod get_weekly_stats;
