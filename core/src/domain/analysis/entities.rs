use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

/// Nutrition analysis decoded from the model's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
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
    /// Numeric fields that could not be read and were set to 0
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub defaulted_fields: Vec<String>,
}

impl AnalysisResult {
    pub fn scores(&self) -> [(&'static str, f64); 4] {
        [
            ("healthScore", self.health_score),
            ("portionQualityScore", self.portion_quality_score),
            ("varietyScore", self.variety_score),
            ("nutritionBalanceScore", self.nutrition_balance_score),
        ]
    }

    /// Rejects the first score outside `[1, 10]`. Nothing is clamped.
    pub fn validate_scores(&self) -> Result<(), CoreError> {
        for (field, value) in self.scores() {
            if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(CoreError::ScoreOutOfRange { field, value });
            }
        }
        Ok(())
    }
}
