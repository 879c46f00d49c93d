use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    analysis::entities::AnalysisResult,
    common::{entities::app_errors::CoreError, generate_uuid_v7},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    /// Capitalized name for display text
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealType::ALL
            .into_iter()
            .find(|meal_type| s.trim().eq_ignore_ascii_case(meal_type.as_str()))
            .ok_or_else(|| CoreError::Invalid(format!("unknown meal type: {s}")))
    }
}

/// One logged and analyzed meal photo. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub logged_at: DateTime<Utc>,
    pub meal_type: MealType,
    pub image_path: String,
    pub thumbnail_path: String,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub food_items: Vec<String>,
    pub health_score: f64,
    pub portion_quality_score: f64,
    pub variety_score: f64,
    pub nutrition_balance_score: f64,
    pub recommendations: String,
    /// ISO week of the day the meal was logged
    pub week_number: u32,
}

#[derive(Debug, Clone)]
pub struct MealRecordConfig {
    pub user_id: Uuid,
    pub logged_at: DateTime<Utc>,
    pub meal_type: MealType,
    pub image_path: String,
    pub thumbnail_path: String,
    pub week_number: u32,
    pub analysis: AnalysisResult,
}

impl MealRecord {
    pub fn new(config: MealRecordConfig) -> Self {
        let analysis = config.analysis;

        Self {
            id: generate_uuid_v7(),
            user_id: config.user_id,
            logged_at: config.logged_at,
            meal_type: config.meal_type,
            image_path: config.image_path,
            thumbnail_path: config.thumbnail_path,
            protein: analysis.protein,
            carbs: analysis.carbs,
            fat: analysis.fat,
            fiber: analysis.fiber,
            sugar: analysis.sugar,
            sodium: analysis.sodium,
            food_items: analysis.food_items,
            health_score: analysis.health_score,
            portion_quality_score: analysis.portion_quality_score,
            variety_score: analysis.variety_score,
            nutrition_balance_score: analysis.nutrition_balance_score,
            recommendations: analysis.recommendations,
            week_number: config.week_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_type_parses_case_insensitively() {
        assert_eq!("Breakfast".parse::<MealType>().unwrap(), MealType::Breakfast);
        assert_eq!(" SNACK ".parse::<MealType>().unwrap(), MealType::Snack);
        assert!(matches!(
            "brunch".parse::<MealType>(),
            Err(CoreError::Invalid(_))
        ));
    }

    #[test]
    fn meal_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MealType::Dinner).unwrap(),
            "\"dinner\""
        );
    }
}
