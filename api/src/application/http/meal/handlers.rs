pub mod delete_meal;
pub mod get_meal;
pub mod get_meals;
pub mod log_meal;
