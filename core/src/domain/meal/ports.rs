use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal::{
        entities::{MealRecord, MealType},
        value_objects::{GetMealsFilter, LogMealInput, LoggedMeal},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MealRepository: Send + Sync {
    fn create_meal(
        &self,
        meal: MealRecord,
    ) -> impl Future<Output = Result<MealRecord, CoreError>> + Send;

    fn get_meal(
        &self,
        meal_id: Uuid,
    ) -> impl Future<Output = Result<Option<MealRecord>, CoreError>> + Send;

    /// Newest first
    fn get_meals(
        &self,
        user_id: Uuid,
        filter: GetMealsFilter,
    ) -> impl Future<Output = Result<Vec<MealRecord>, CoreError>> + Send;

    /// Meals logged in `[start, end)`, oldest first
    fn get_meals_in_range(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<MealRecord>, CoreError>> + Send;

    fn delete_meal(&self, meal_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MealService: Send + Sync {
    /// Analyzes the photo, stores the meal and its images, then updates the
    /// streak and the weekly stat.
    fn log_meal(
        &self,
        input: LogMealInput,
    ) -> impl Future<Output = Result<LoggedMeal, CoreError>> + Send;

    fn get_meal(
        &self,
        user_id: Uuid,
        meal_id: Uuid,
    ) -> impl Future<Output = Result<MealRecord, CoreError>> + Send;

    fn get_meals(
        &self,
        user_id: Uuid,
        filter: GetMealsFilter,
    ) -> impl Future<Output = Result<Vec<MealRecord>, CoreError>> + Send;

    fn get_meals_between(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<MealRecord>, CoreError>> + Send;

    fn get_meals_by_type(
        &self,
        user_id: Uuid,
        meal_type: MealType,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<Vec<MealRecord>, CoreError>> + Send;

    fn get_todays_meals(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<MealRecord>, CoreError>> + Send;

    fn get_todays_meals_by_type(
        &self,
        user_id: Uuid,
        meal_type: MealType,
    ) -> impl Future<Output = Result<Vec<MealRecord>, CoreError>> + Send;

    /// Removes both image files, then the record, then recomputes the
    /// meal's weekly stat.
    fn delete_meal(
        &self,
        user_id: Uuid,
        meal_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
