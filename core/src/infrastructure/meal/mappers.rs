use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        meal::entities::{MealRecord, MealType},
    },
    entity::meals,
};

impl TryFrom<&meals::Model> for MealRecord {
    type Error = CoreError;

    fn try_from(model: &meals::Model) -> Result<Self, Self::Error> {
        let meal_type: MealType = model.meal_type.parse().map_err(|e| {
            tracing::error!(meal_id = %model.id, "Stored meal has an unknown type: {}", e);
            CoreError::Storage(format!("meal {} has unknown type {}", model.id, model.meal_type))
        })?;

        let food_items: Vec<String> =
            serde_json::from_value(model.food_items.clone()).unwrap_or_default();

        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            logged_at: model.logged_at.to_utc(),
            meal_type,
            image_path: model.image_path.clone(),
            thumbnail_path: model.thumbnail_path.clone(),
            protein: model.protein,
            carbs: model.carbs,
            fat: model.fat,
            fiber: model.fiber,
            sugar: model.sugar,
            sodium: model.sodium,
            food_items,
            health_score: model.health_score,
            portion_quality_score: model.portion_quality_score,
            variety_score: model.variety_score,
            nutrition_balance_score: model.nutrition_balance_score,
            recommendations: model.recommendations.clone(),
            week_number: u32::try_from(model.week_number).unwrap_or(0),
        })
    }
}

impl TryFrom<meals::Model> for MealRecord {
    type Error = CoreError;

    fn try_from(model: meals::Model) -> Result<Self, Self::Error> {
        Self::try_from(&model)
    }
}

impl From<MealRecord> for meals::ActiveModel {
    fn from(meal: MealRecord) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(meal.id),
            user_id: Set(meal.user_id),
            logged_at: Set(meal.logged_at.fixed_offset()),
            meal_type: Set(meal.meal_type.as_str().to_string()),
            image_path: Set(meal.image_path),
            thumbnail_path: Set(meal.thumbnail_path),
            protein: Set(meal.protein),
            carbs: Set(meal.carbs),
            fat: Set(meal.fat),
            fiber: Set(meal.fiber),
            sugar: Set(meal.sugar),
            sodium: Set(meal.sodium),
            food_items: Set(serde_json::Value::from(meal.food_items)),
            health_score: Set(meal.health_score),
            portion_quality_score: Set(meal.portion_quality_score),
            variety_score: Set(meal.variety_score),
            nutrition_balance_score: Set(meal.nutrition_balance_score),
            recommendations: Set(meal.recommendations),
            week_number: Set(i32::try_from(meal.week_number).unwrap_or(0)),
        }
    }
}
