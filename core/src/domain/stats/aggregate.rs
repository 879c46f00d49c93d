//! Pure rollups over meal records. Nothing here touches a store.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    meal::entities::{MealRecord, MealType},
    stats::entities::{WeeklyStat, WeeklyTrend},
};

/// Health score difference between two weeks that counts as a change
pub const TREND_THRESHOLD: f64 = 0.5;

/// Mean of every macro and score field over a non-empty set of meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientAverages {
    pub meal_count: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub health_score: f64,
    pub portion_quality_score: f64,
    pub variety_score: f64,
    pub nutrition_balance_score: f64,
}

impl NutrientAverages {
    /// `None` for an empty slice.
    pub fn of(meals: &[MealRecord]) -> Option<Self> {
        if meals.is_empty() {
            return None;
        }

        let count = meals.len() as f64;
        let mean = |field: fn(&MealRecord) -> f64| meals.iter().map(field).sum::<f64>() / count;

        Some(Self {
            meal_count: meals.len() as u32,
            protein: mean(|m| m.protein),
            carbs: mean(|m| m.carbs),
            fat: mean(|m| m.fat),
            fiber: mean(|m| m.fiber),
            sugar: mean(|m| m.sugar),
            sodium: mean(|m| m.sodium),
            health_score: mean(|m| m.health_score),
            portion_quality_score: mean(|m| m.portion_quality_score),
            variety_score: mean(|m| m.variety_score),
            nutrition_balance_score: mean(|m| m.nutrition_balance_score),
        })
    }
}

/// Protein/carbs/fat shares of their combined grams, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct MacroSplit {
    pub protein_percent: f64,
    pub carbs_percent: f64,
    pub fat_percent: f64,
}

impl MacroSplit {
    /// Negative inputs count as 0. All zeros when nothing is left.
    pub fn from_totals(protein: f64, carbs: f64, fat: f64) -> Self {
        let clamp = |grams: f64| if grams.is_finite() { grams.max(0.0) } else { 0.0 };
        let (protein, carbs, fat) = (clamp(protein), clamp(carbs), clamp(fat));
        let total = protein + carbs + fat;

        if total <= 0.0 {
            return Self::default();
        }

        Self {
            protein_percent: protein / total * 100.0,
            carbs_percent: carbs / total * 100.0,
            fat_percent: fat / total * 100.0,
        }
    }

    pub fn of(meals: &[MealRecord]) -> Self {
        let totals = MacroTotals::of(meals);
        Self::from_totals(totals.protein, totals.carbs, totals.fat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct MacroTotals {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroTotals {
    pub fn of(meals: &[MealRecord]) -> Self {
        meals.iter().fold(Self::default(), |acc, meal| Self {
            protein: acc.protein + meal.protein,
            carbs: acc.carbs + meal.carbs,
            fat: acc.fat + meal.fat,
        })
    }
}

/// Non-empty recommendations, space-joined in meal order
pub fn combine_recommendations(meals: &[MealRecord]) -> String {
    meals
        .iter()
        .map(|meal| meal.recommendations.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MealTypeAnalytics {
    pub meal_type: MealType,
    pub meal_count: u32,
    pub averages: NutrientAverages,
    pub totals: MacroTotals,
    pub macro_split: MacroSplit,
    pub combined_recommendations: String,
}

impl MealTypeAnalytics {
    /// Rollup of the meals of `meal_type`, `None` when there are none.
    pub fn of(meal_type: MealType, meals: &[MealRecord]) -> Option<Self> {
        let of_type: Vec<MealRecord> = meals
            .iter()
            .filter(|meal| meal.meal_type == meal_type)
            .cloned()
            .collect();
        let averages = NutrientAverages::of(&of_type)?;
        let totals = MacroTotals::of(&of_type);

        Some(Self {
            meal_type,
            meal_count: averages.meal_count,
            averages,
            totals,
            macro_split: MacroSplit::from_totals(totals.protein, totals.carbs, totals.fat),
            combined_recommendations: combine_recommendations(&of_type),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailyAnalytics {
    pub date: NaiveDate,
    pub breakfast: Option<MealTypeAnalytics>,
    pub lunch: Option<MealTypeAnalytics>,
    pub dinner: Option<MealTypeAnalytics>,
    pub snack: Option<MealTypeAnalytics>,
    /// Mean of the present groups' average health scores
    pub overall_day_score: Option<f64>,
    pub daily_summary: String,
}

impl DailyAnalytics {
    pub fn of(date: NaiveDate, meals: &[MealRecord]) -> Self {
        let groups: Vec<MealTypeAnalytics> = MealType::ALL
            .into_iter()
            .filter_map(|meal_type| MealTypeAnalytics::of(meal_type, meals))
            .collect();

        let overall_day_score = if groups.is_empty() {
            None
        } else {
            let sum: f64 = groups.iter().map(|g| g.averages.health_score).sum();
            Some(sum / groups.len() as f64)
        };

        let daily_summary = groups
            .iter()
            .map(|g| format!("{}: {}", g.meal_type.label(), g.combined_recommendations))
            .collect::<Vec<_>>()
            .join("\n\n");

        let group = |meal_type: MealType| {
            groups
                .iter()
                .find(|g| g.meal_type == meal_type)
                .cloned()
        };

        Self {
            date,
            breakfast: group(MealType::Breakfast),
            lunch: group(MealType::Lunch),
            dinner: group(MealType::Dinner),
            snack: group(MealType::Snack),
            overall_day_score,
            daily_summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub meal_count: u32,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub average_health_score: Option<f64>,
}

impl DailyTotals {
    pub fn of(date: NaiveDate, meals: &[MealRecord]) -> Self {
        let totals = MacroTotals::of(meals);

        Self {
            date,
            meal_count: meals.len() as u32,
            total_protein: totals.protein,
            total_carbs: totals.carbs,
            total_fat: totals.fat,
            average_health_score: NutrientAverages::of(meals).map(|a| a.health_score),
        }
    }
}

pub fn classify_trend(current_health: f64, previous_health: Option<f64>) -> WeeklyTrend {
    let Some(previous) = previous_health else {
        return WeeklyTrend::Baseline;
    };

    let diff = current_health - previous;
    if diff > TREND_THRESHOLD {
        WeeklyTrend::Improving
    } else if diff < -TREND_THRESHOLD {
        WeeklyTrend::Declining
    } else {
        WeeklyTrend::Maintaining
    }
}

/// Best and worst meal ids by health score. Ties keep the first seen.
pub fn best_and_worst(meals: &[MealRecord]) -> Option<(Uuid, Uuid)> {
    let first = meals.first()?;
    let (mut best, mut worst) = (first, first);

    for meal in &meals[1..] {
        if meal.health_score > best.health_score {
            best = meal;
        }
        if meal.health_score < worst.health_score {
            worst = meal;
        }
    }

    Some((best.id, worst.id))
}

pub struct WeeklyStatInput<'a> {
    pub user_id: Uuid,
    pub week_start: NaiveDate,
    /// Meals of the week, oldest first
    pub meals: &'a [MealRecord],
    pub previous_week_health: Option<f64>,
    /// Keeps the row identity stable across recomputations
    pub existing_id: Option<Uuid>,
    pub computed_at: DateTime<Utc>,
}

/// `None` when the week has no meals or ends past the last representable day.
pub fn build_weekly_stat(input: WeeklyStatInput<'_>) -> Option<WeeklyStat> {
    let averages = NutrientAverages::of(input.meals)?;
    let (best_meal_id, worst_meal_id) = best_and_worst(input.meals)?;
    let week_end_date = input.week_start.checked_add_signed(Duration::days(6))?;

    Some(WeeklyStat {
        id: input.existing_id.unwrap_or_else(Uuid::new_v4),
        user_id: input.user_id,
        week_start_date: input.week_start,
        week_end_date,
        total_meals: averages.meal_count,
        macro_split: MacroSplit::of(input.meals),
        best_meal_id: Some(best_meal_id),
        worst_meal_id: Some(worst_meal_id),
        weekly_trend: classify_trend(averages.health_score, input.previous_week_health),
        averages,
        updated_at: input.computed_at,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::TimeZone;

    use super::*;

    pub(crate) fn meal(meal_type: MealType, health: f64, macros: (f64, f64, f64)) -> MealRecord {
        MealRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            logged_at: Utc.with_ymd_and_hms(2025, 11, 12, 12, 0, 0).unwrap(),
            meal_type,
            image_path: "users/x/a.jpg".to_string(),
            thumbnail_path: "users/x/a_thumb.jpg".to_string(),
            protein: macros.0,
            carbs: macros.1,
            fat: macros.2,
            fiber: 2.0,
            sugar: 3.0,
            sodium: 0.5,
            food_items: vec!["rice".to_string()],
            health_score: health,
            portion_quality_score: 6.0,
            variety_score: 5.0,
            nutrition_balance_score: 7.0,
            recommendations: format!("tip {health}"),
            week_number: 46,
        }
    }

    fn week_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 10).unwrap()
    }

    #[test]
    fn averages_are_absent_for_no_meals() {
        assert_eq!(NutrientAverages::of(&[]), None);
    }

    #[test]
    fn averages_every_field() {
        let meals = vec![
            meal(MealType::Lunch, 6.0, (10.0, 20.0, 5.0)),
            meal(MealType::Dinner, 8.0, (30.0, 40.0, 15.0)),
        ];
        let averages = NutrientAverages::of(&meals).unwrap();

        assert_eq!(averages.meal_count, 2);
        assert_eq!(averages.protein, 20.0);
        assert_eq!(averages.carbs, 30.0);
        assert_eq!(averages.fat, 10.0);
        assert_eq!(averages.health_score, 7.0);
        assert_eq!(averages.sodium, 0.5);
    }

    #[test]
    fn macro_split_sums_to_hundred() {
        for (p, c, f) in [(20.0, 30.0, 10.0), (1.0, 0.0, 0.0), (0.1, 0.2, 0.3), (7.0, 13.0, 999.0)] {
            let split = MacroSplit::from_totals(p, c, f);
            let sum = split.protein_percent + split.carbs_percent + split.fat_percent;
            assert!((sum - 100.0).abs() < 1e-9, "{p} {c} {f} -> {sum}");
        }
    }

    #[test]
    fn macro_split_zero_and_negative_totals() {
        assert_eq!(MacroSplit::from_totals(0.0, 0.0, 0.0), MacroSplit::default());
        assert_eq!(MacroSplit::from_totals(-5.0, 0.0, -1.0), MacroSplit::default());

        let split = MacroSplit::from_totals(-10.0, 50.0, 50.0);
        assert_eq!(split.protein_percent, 0.0);
        assert_eq!(split.carbs_percent, 50.0);
        assert!(!split.fat_percent.is_nan());
    }

    #[test]
    fn trend_thresholds() {
        assert_eq!(classify_trend(7.0, None), WeeklyTrend::Baseline);
        assert_eq!(classify_trend(7.6, Some(7.0)), WeeklyTrend::Improving);
        assert_eq!(classify_trend(6.4, Some(7.0)), WeeklyTrend::Declining);
        assert_eq!(classify_trend(7.5, Some(7.0)), WeeklyTrend::Maintaining);
        assert_eq!(classify_trend(6.5, Some(7.0)), WeeklyTrend::Maintaining);
    }

    #[test]
    fn best_and_worst_keep_first_on_ties() {
        let meals = vec![
            meal(MealType::Breakfast, 7.0, (1.0, 1.0, 1.0)),
            meal(MealType::Lunch, 9.0, (1.0, 1.0, 1.0)),
            meal(MealType::Dinner, 9.0, (1.0, 1.0, 1.0)),
            meal(MealType::Snack, 3.0, (1.0, 1.0, 1.0)),
            meal(MealType::Snack, 3.0, (1.0, 1.0, 1.0)),
        ];

        assert_eq!(best_and_worst(&meals), Some((meals[1].id, meals[3].id)));
        assert_eq!(best_and_worst(&[]), None);
    }

    #[test]
    fn daily_analytics_groups_by_meal_type() {
        let mut empty_tip = meal(MealType::Breakfast, 6.0, (10.0, 10.0, 0.0));
        empty_tip.recommendations = "  ".to_string();
        let meals = vec![
            meal(MealType::Breakfast, 8.0, (10.0, 30.0, 10.0)),
            empty_tip,
            meal(MealType::Dinner, 5.0, (40.0, 40.0, 20.0)),
        ];

        let analytics = DailyAnalytics::of(week_start(), &meals);

        let breakfast = analytics.breakfast.as_ref().unwrap();
        assert_eq!(breakfast.meal_count, 2);
        assert_eq!(breakfast.averages.health_score, 7.0);
        assert_eq!(breakfast.totals.protein, 20.0);
        assert_eq!(breakfast.combined_recommendations, "tip 8");
        assert!(analytics.lunch.is_none());
        assert!(analytics.snack.is_none());
        assert_eq!(analytics.overall_day_score, Some(6.0));
        assert_eq!(analytics.daily_summary, "Breakfast: tip 8\n\nDinner: tip 5");
    }

    #[test]
    fn daily_analytics_of_empty_day() {
        let analytics = DailyAnalytics::of(week_start(), &[]);

        assert_eq!(analytics.overall_day_score, None);
        assert!(analytics.daily_summary.is_empty());
    }

    #[test]
    fn daily_totals() {
        let meals = vec![
            meal(MealType::Lunch, 6.0, (10.0, 20.0, 5.0)),
            meal(MealType::Dinner, 9.0, (15.0, 25.0, 10.0)),
        ];
        let totals = DailyTotals::of(week_start(), &meals);

        assert_eq!(totals.meal_count, 2);
        assert_eq!(totals.total_protein, 25.0);
        assert_eq!(totals.total_carbs, 45.0);
        assert_eq!(totals.average_health_score, Some(7.5));
        assert_eq!(DailyTotals::of(week_start(), &[]).average_health_score, None);
    }

    #[test]
    fn weekly_stat_keeps_existing_id() {
        let meals = vec![
            meal(MealType::Lunch, 6.0, (10.0, 20.0, 5.0)),
            meal(MealType::Dinner, 9.0, (15.0, 25.0, 10.0)),
        ];
        let id = Uuid::new_v4();
        let stat = build_weekly_stat(WeeklyStatInput {
            user_id: Uuid::nil(),
            week_start: week_start(),
            meals: &meals,
            previous_week_health: Some(6.5),
            existing_id: Some(id),
            computed_at: Utc::now(),
        })
        .unwrap();

        assert_eq!(stat.id, id);
        assert_eq!(stat.total_meals, 2);
        assert_eq!(stat.week_end_date, NaiveDate::from_ymd_opt(2025, 11, 16).unwrap());
        assert_eq!(stat.best_meal_id, Some(meals[1].id));
        assert_eq!(stat.worst_meal_id, Some(meals[0].id));
        assert_eq!(stat.weekly_trend, WeeklyTrend::Improving);
    }

    #[test]
    fn weekly_stat_absent_for_empty_week() {
        let stat = build_weekly_stat(WeeklyStatInput {
            user_id: Uuid::nil(),
            week_start: week_start(),
            meals: &[],
            previous_week_health: None,
            existing_id: None,
            computed_at: Utc::now(),
        });

        assert!(stat.is_none());
    }
}
