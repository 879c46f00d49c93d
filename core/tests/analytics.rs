mod common;

use chrono::{Duration, NaiveDate};
use common::{Harness, analysis_reply, upload};
use eatup_core::domain::{
    common::entities::app_errors::CoreError,
    meal::{entities::MealType, ports::MealService},
    stats::{entities::WeeklyTrend, ports::StatsService},
    streak::ports::StreakService,
};
use uuid::Uuid;

async fn log(harness: &Harness, user_id: Uuid, meal_type: MealType, health: f64) -> Uuid {
    harness.client.push(Ok(analysis_reply(health)));
    harness
        .service
        .log_meal(upload(user_id, meal_type))
        .await
        .unwrap()
        .meal
        .id
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
}

#[tokio::test]
async fn daily_analytics_groups_by_meal_type() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;

    log(&harness, user_id, MealType::Breakfast, 8.0).await;
    harness.clock.advance(Duration::hours(4));
    log(&harness, user_id, MealType::Lunch, 6.0).await;
    harness.clock.advance(Duration::hours(1));
    log(&harness, user_id, MealType::Lunch, 4.0).await;

    let analytics = harness
        .service
        .get_daily_analytics(user_id, day(12))
        .await
        .unwrap();

    assert_eq!(analytics.breakfast.as_ref().map(|b| b.meal_count), Some(1));
    let lunch = analytics.lunch.as_ref().unwrap();
    assert_eq!(lunch.meal_count, 2);
    assert_eq!(lunch.averages.health_score, 5.0);
    assert_eq!(lunch.totals.carbs, 60.0);
    assert!(analytics.dinner.is_none());
    assert!(analytics.snack.is_none());
    assert!(analytics.daily_summary.starts_with("Breakfast: "));

    let totals = harness.service.get_daily_totals(user_id, day(12)).await.unwrap();
    assert_eq!(totals.meal_count, 3);
    assert_eq!(totals.total_protein, 60.0);
    assert_eq!(totals.average_health_score, Some(6.0));

    let empty = harness.service.get_daily_totals(user_id, day(13)).await.unwrap();
    assert_eq!(empty.meal_count, 0);
    assert_eq!(empty.average_health_score, None);
}

#[tokio::test]
async fn weekly_trend_compares_with_the_previous_week() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;

    log(&harness, user_id, MealType::Dinner, 5.0).await;
    harness.clock.advance(Duration::weeks(1));
    let best = log(&harness, user_id, MealType::Lunch, 9.0).await;
    let worst = log(&harness, user_id, MealType::Dinner, 7.0).await;

    let week = harness.service.get_current_weekly_stat(user_id).await.unwrap();
    assert_eq!(week.week_start_date, day(17));
    assert_eq!(week.week_end_date, day(23));
    assert_eq!(week.total_meals, 2);
    assert_eq!(week.averages.health_score, 8.0);
    assert_eq!(week.weekly_trend, WeeklyTrend::Improving);
    assert_eq!(week.best_meal_id, Some(best));
    assert_eq!(week.worst_meal_id, Some(worst));

    let all = harness.service.get_all_weekly_stats(user_id).await.unwrap();
    let starts: Vec<NaiveDate> = all.iter().map(|s| s.week_start_date).collect();
    assert_eq!(starts, vec![day(17), day(10)]);

    let earlier = harness.service.get_weekly_stat(user_id, day(14)).await.unwrap();
    assert_eq!(earlier.weekly_trend, WeeklyTrend::Baseline);
}

#[tokio::test]
async fn weekly_stat_id_is_stable_across_refreshes() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;

    log(&harness, user_id, MealType::Breakfast, 6.0).await;
    let first = harness.service.get_current_weekly_stat(user_id).await.unwrap();

    harness.clock.advance(Duration::hours(5));
    log(&harness, user_id, MealType::Lunch, 8.0).await;
    let second = harness.service.get_current_weekly_stat(user_id).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.total_meals, 2);
    assert!(second.updated_at > first.updated_at);
}

#[tokio::test]
async fn upload_days_cover_an_inclusive_range() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;

    log(&harness, user_id, MealType::Breakfast, 7.0).await;
    harness.clock.advance(Duration::hours(3));
    log(&harness, user_id, MealType::Lunch, 7.0).await;
    harness.clock.advance(Duration::days(2));
    log(&harness, user_id, MealType::Dinner, 7.0).await;

    let days = harness
        .service
        .get_days_with_uploads(user_id, day(12), day(14))
        .await
        .unwrap();
    assert_eq!(days, vec![day(12), day(14)]);

    let days = harness
        .service
        .get_days_with_uploads(user_id, day(13), day(13))
        .await
        .unwrap();
    assert!(days.is_empty());

    assert!(matches!(
        harness
            .service
            .get_days_with_uploads(user_id, day(14), day(12))
            .await,
        Err(CoreError::Invalid(_))
    ));
}

#[tokio::test]
async fn todays_meals_follow_the_clock() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;

    log(&harness, user_id, MealType::Breakfast, 7.0).await;
    harness.clock.advance(Duration::hours(2));
    log(&harness, user_id, MealType::Snack, 7.0).await;

    let today = harness.service.get_todays_meals(user_id).await.unwrap();
    assert_eq!(today.len(), 2);
    assert!(today[0].logged_at < today[1].logged_at);

    let snacks = harness
        .service
        .get_todays_meals_by_type(user_id, MealType::Snack)
        .await
        .unwrap();
    assert_eq!(snacks.len(), 1);

    harness.clock.advance(Duration::days(1));
    assert!(harness.service.get_todays_meals(user_id).await.unwrap().is_empty());

    let recent = harness
        .service
        .get_meals_by_type(user_id, MealType::Breakfast, Some(5))
        .await
        .unwrap();
    assert_eq!(recent.len(), 1);
}
