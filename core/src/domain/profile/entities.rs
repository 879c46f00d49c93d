use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

const UNDISCLOSED_GENDER: &[&str] = &["prefer not to say", "not specified"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub user_id: Uuid,
    pub age: u32,
    /// Pounds
    pub weight: f64,
    /// Inches
    pub height: f64,
    pub gender: Option<String>,
    pub activity_level: String,
    pub dietary_restrictions: String,
    pub health_goal: String,
    pub macro_targets: Option<MacroTargets>,
}

/// Daily macro goals in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroTargets {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Profile {
    /// Gender to show the model, `None` when unset or undisclosed.
    pub fn disclosed_gender(&self) -> Option<&str> {
        let gender = self.gender.as_deref()?.trim();
        if gender.is_empty()
            || UNDISCLOSED_GENDER
                .iter()
                .any(|undisclosed| gender.eq_ignore_ascii_case(undisclosed))
        {
            return None;
        }
        Some(gender)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(CoreError::Invalid("weight must be positive".to_string()));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(CoreError::Invalid("height must be positive".to_string()));
        }
        if let Some(targets) = &self.macro_targets {
            let all_valid = [targets.protein, targets.carbs, targets.fat]
                .iter()
                .all(|grams| grams.is_finite() && *grams >= 0.0);
            if !all_valid {
                return Err(CoreError::Invalid(
                    "macro targets must be non-negative".to_string(),
                ));
            }
        }
        Ok(())
    }
}
