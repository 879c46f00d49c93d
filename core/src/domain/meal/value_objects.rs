use bytes::Bytes;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    analysis::entities::AnalysisResult,
    meal::entities::{MealRecord, MealType},
};

pub const DEFAULT_MEAL_LIMIT: u32 = 20;

#[derive(Debug, Clone)]
pub struct LogMealInput {
    pub user_id: Uuid,
    pub image: Bytes,
    pub description: Option<String>,
    pub meal_type: MealType,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoggedMeal {
    pub analysis: AnalysisResult,
    pub display_text: String,
    pub meal: MealRecord,
}

#[derive(Debug, Clone, Default)]
pub struct GetMealsFilter {
    pub meal_type: Option<MealType>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl GetMealsFilter {
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_MEAL_LIMIT)
    }

    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }
}
