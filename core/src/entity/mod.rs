pub mod meals;
pub mod profiles;
pub mod user_streaks;
pub mod weekly_stats;
