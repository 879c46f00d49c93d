use eatup_core::domain::profile::entities::{MacroTargets, Profile};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProfileRequest {
    #[validate(range(max = 150))]
    pub age: u32,
    /// Pounds
    #[validate(range(exclusive_min = 0.0))]
    pub weight: f64,
    /// Inches
    #[validate(range(exclusive_min = 0.0))]
    pub height: f64,
    pub gender: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub activity_level: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub dietary_restrictions: String,
    #[validate(length(min = 1, max = 200))]
    pub health_goal: String,
    /// Grams per day
    #[validate(range(min = 0.0))]
    pub protein_target: Option<f64>,
    #[validate(range(min = 0.0))]
    pub carb_target: Option<f64>,
    #[validate(range(min = 0.0))]
    pub fat_target: Option<f64>,
}

impl UpsertProfileRequest {
    /// Targets are kept only when all three are given.
    pub fn into_profile(self, user_id: Uuid) -> Profile {
        let macro_targets = match (self.protein_target, self.carb_target, self.fat_target) {
            (Some(protein), Some(carbs), Some(fat)) => Some(MacroTargets {
                protein,
                carbs,
                fat,
            }),
            _ => None,
        };

        Profile {
            user_id,
            age: self.age,
            weight: self.weight,
            height: self.height,
            gender: self.gender,
            activity_level: self.activity_level,
            dietary_restrictions: self.dietary_restrictions,
            health_goal: self.health_goal,
            macro_targets,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request() -> UpsertProfileRequest {
        serde_json::from_value(json!({
            "age": 30,
            "weight": 170.0,
            "height": 70.0,
            "activityLevel": "active",
            "healthGoal": "build muscle",
            "proteinTarget": 150.0,
            "carbTarget": 220.0,
            "fatTarget": 70.0
        }))
        .unwrap()
    }

    #[test]
    fn camel_case_body_converts_to_profile() {
        let user_id = Uuid::new_v4();
        let request = request();
        assert!(request.validate().is_ok());

        let profile = request.into_profile(user_id);
        assert_eq!(profile.user_id, user_id);
        assert_eq!(profile.dietary_restrictions, "");
        assert_eq!(
            profile.macro_targets,
            Some(MacroTargets {
                protein: 150.0,
                carbs: 220.0,
                fat: 70.0
            })
        );
    }

    #[test]
    fn partial_targets_are_dropped() {
        let request = UpsertProfileRequest {
            fat_target: None,
            ..request()
        };
        assert_eq!(request.into_profile(Uuid::nil()).macro_targets, None);
    }

    #[test]
    fn non_positive_body_measures_are_rejected() {
        let request = UpsertProfileRequest {
            weight: 0.0,
            ..request()
        };
        assert!(request.validate().is_err());

        let request = UpsertProfileRequest {
            protein_target: Some(-1.0),
            ..self::request()
        };
        assert!(request.validate().is_err());
    }
}
