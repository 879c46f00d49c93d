use sea_orm::ActiveValue::Set;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        stats::{
            aggregate::{MacroSplit, NutrientAverages},
            entities::WeeklyStat,
        },
    },
    entity::weekly_stats,
};

impl TryFrom<&weekly_stats::Model> for WeeklyStat {
    type Error = CoreError;

    fn try_from(model: &weekly_stats::Model) -> Result<Self, Self::Error> {
        let total_meals = u32::try_from(model.total_meals).unwrap_or(0);

        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            week_start_date: model.week_start_date,
            week_end_date: model.week_end_date,
            total_meals,
            averages: NutrientAverages {
                meal_count: total_meals,
                protein: model.average_protein,
                carbs: model.average_carbs,
                fat: model.average_fat,
                fiber: model.average_fiber,
                sugar: model.average_sugar,
                sodium: model.average_sodium,
                health_score: model.average_health_score,
                portion_quality_score: model.average_portion_quality_score,
                variety_score: model.average_variety_score,
                nutrition_balance_score: model.average_nutrition_balance_score,
            },
            macro_split: MacroSplit {
                protein_percent: model.protein_percent,
                carbs_percent: model.carbs_percent,
                fat_percent: model.fat_percent,
            },
            best_meal_id: model.best_meal_id,
            worst_meal_id: model.worst_meal_id,
            weekly_trend: model.weekly_trend.parse()?,
            updated_at: model.updated_at.to_utc(),
        })
    }
}

impl TryFrom<weekly_stats::Model> for WeeklyStat {
    type Error = CoreError;

    fn try_from(model: weekly_stats::Model) -> Result<Self, Self::Error> {
        Self::try_from(&model)
    }
}

impl From<WeeklyStat> for weekly_stats::ActiveModel {
    fn from(stat: WeeklyStat) -> Self {
        let averages = stat.averages;

        Self {
            id: Set(stat.id),
            user_id: Set(stat.user_id),
            week_start_date: Set(stat.week_start_date),
            week_end_date: Set(stat.week_end_date),
            total_meals: Set(i32::try_from(stat.total_meals).unwrap_or(i32::MAX)),
            average_protein: Set(averages.protein),
            average_carbs: Set(averages.carbs),
            average_fat: Set(averages.fat),
            average_fiber: Set(averages.fiber),
            average_sugar: Set(averages.sugar),
            average_sodium: Set(averages.sodium),
            average_health_score: Set(averages.health_score),
            average_portion_quality_score: Set(averages.portion_quality_score),
            average_variety_score: Set(averages.variety_score),
            average_nutrition_balance_score: Set(averages.nutrition_balance_score),
            protein_percent: Set(stat.macro_split.protein_percent),
            carbs_percent: Set(stat.macro_split.carbs_percent),
            fat_percent: Set(stat.macro_split.fat_percent),
            best_meal_id: Set(stat.best_meal_id),
            worst_meal_id: Set(stat.worst_meal_id),
            weekly_trend: Set(stat.weekly_trend.as_str().to_string()),
            updated_at: Set(stat.updated_at.fixed_offset()),
        }
    }
}
