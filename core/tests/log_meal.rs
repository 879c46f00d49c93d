mod common;

use chrono::{Duration, NaiveDate};
use common::{Harness, analysis_reply, upload};
use eatup_core::{
    domain::{
        common::entities::app_errors::CoreError,
        meal::{entities::MealType, ports::MealService},
        stats::{entities::WeeklyTrend, ports::StatsService},
        streak::{
            entities::UserStreakState,
            ports::{StreakRepository, StreakService},
        },
    },
    infrastructure::object_storage::InMemoryObjectStorage,
};
use uuid::Uuid;

#[tokio::test]
async fn first_breakfast_is_stored_and_starts_a_streak() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;
    harness.client.push(Ok(analysis_reply(9.0)));

    let logged = harness
        .service
        .log_meal(upload(user_id, MealType::Breakfast))
        .await
        .unwrap();

    assert_eq!(logged.analysis.carbs, 30.0);
    assert_eq!(logged.meal.carbs, 30.0);
    assert_eq!(logged.meal.meal_type, MealType::Breakfast);
    assert_eq!(logged.meal.week_number, 46);
    assert!(logged.display_text.starts_with("🌟 Breakfast Analysis"));
    assert!(logged.display_text.contains("• Carbs: 30.0g"));

    let stored = harness.service.get_meal(user_id, logged.meal.id).await.unwrap();
    assert_eq!(stored, logged.meal);

    let mut keys = harness.objects.keys().await;
    keys.sort();
    assert_eq!(keys, vec![logged.meal.image_path.clone(), logged.meal.thumbnail_path.clone()]);

    let stats = harness.service.get_user_stats(user_id).await.unwrap();
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.longest_streak, 1);
    assert!(stats.message.is_some());

    let week = harness.service.get_current_weekly_stat(user_id).await.unwrap();
    assert_eq!(week.total_meals, 1);
    assert_eq!(week.weekly_trend, WeeklyTrend::Baseline);
    assert_eq!(week.best_meal_id, Some(logged.meal.id));
}

#[tokio::test]
async fn uploads_on_consecutive_days_extend_the_streak() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;

    harness.client.push(Ok(analysis_reply(7.0)));
    harness
        .service
        .log_meal(upload(user_id, MealType::Lunch))
        .await
        .unwrap();

    // second meal the same day does not count twice
    harness.clock.advance(Duration::hours(4));
    harness.client.push(Ok(analysis_reply(7.0)));
    harness
        .service
        .log_meal(upload(user_id, MealType::Snack))
        .await
        .unwrap();

    harness.clock.advance(Duration::days(1));
    harness.client.push(Ok(analysis_reply(7.0)));
    harness
        .service
        .log_meal(upload(user_id, MealType::Dinner))
        .await
        .unwrap();

    let stats = harness.service.get_user_stats(user_id).await.unwrap();
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.longest_streak, 2);

    // a gap of more than one day resets
    harness.clock.advance(Duration::days(3));
    harness.client.push(Ok(analysis_reply(7.0)));
    harness
        .service
        .log_meal(upload(user_id, MealType::Dinner))
        .await
        .unwrap();

    let stats = harness.service.get_user_stats(user_id).await.unwrap();
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.longest_streak, 2);
}

#[tokio::test]
async fn network_failure_leaves_nothing_behind() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;
    harness
        .client
        .push(Err(CoreError::Network("connection reset".to_string())));

    let err = harness
        .service
        .log_meal(upload(user_id, MealType::Lunch))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Network(_)));
    assert!(err.is_transient());
    assert_eq!(harness.store.meal_count().await, 0);
    assert!(harness.objects.keys().await.is_empty());

    let stats = harness.service.get_user_stats(user_id).await.unwrap();
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.last_upload_date, None);
}

#[tokio::test]
async fn missing_profile_fails_before_analysis() {
    let harness = Harness::new();
    harness.client.push(Ok(analysis_reply(8.0)));

    let err = harness
        .service
        .log_meal(upload(Uuid::new_v4(), MealType::Breakfast))
        .await
        .unwrap_err();

    assert_eq!(err, CoreError::NotFound);
    assert_eq!(harness.client.calls(), 0);
}

#[tokio::test]
async fn malformed_response_persists_nothing() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;
    harness
        .client
        .push(Ok("I could not see any food in this photo.".to_string()));

    let err = harness
        .service
        .log_meal(upload(user_id, MealType::Dinner))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::MalformedResponse(_)));
    assert_eq!(harness.store.meal_count().await, 0);
    assert!(harness.objects.keys().await.is_empty());
}

#[tokio::test]
async fn out_of_range_score_is_rejected() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;
    harness.client.push(Ok(analysis_reply(11.0)));

    let err = harness
        .service
        .log_meal(upload(user_id, MealType::Dinner))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        CoreError::ScoreOutOfRange {
            field: "healthScore",
            value: 11.0
        }
    );
    assert_eq!(harness.store.meal_count().await, 0);
}

#[tokio::test]
async fn failed_record_write_removes_uploaded_images() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;
    harness.store.fail_meal_writes(true);
    harness.client.push(Ok(analysis_reply(8.0)));

    let err = harness
        .service
        .log_meal(upload(user_id, MealType::Lunch))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Storage(_)));
    assert!(harness.objects.keys().await.is_empty());

    let stats = harness.service.get_user_stats(user_id).await.unwrap();
    assert_eq!(stats.current_streak, 0);
}

#[tokio::test]
async fn failed_thumbnail_write_stores_nothing() {
    let user_id = Uuid::new_v4();
    let harness = Harness::with_objects(InMemoryObjectStorage::failing_on("_thumb.jpg"))
        .with_profile(user_id)
        .await;
    harness.client.push(Ok(analysis_reply(8.0)));

    let err = harness
        .service
        .log_meal(upload(user_id, MealType::Lunch))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Storage(_)));
    assert!(harness.objects.keys().await.is_empty());
    assert_eq!(harness.store.meal_count().await, 0);
}

#[tokio::test]
async fn streak_failure_does_not_fail_the_upload() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;
    harness.store.fail_streak_writes(true);
    harness.client.push(Ok(analysis_reply(6.0)));

    let logged = harness
        .service
        .log_meal(upload(user_id, MealType::Snack))
        .await
        .unwrap();

    assert_eq!(harness.store.meal_count().await, 1);
    assert!(logged.display_text.starts_with("👍 Snack Analysis"));

    let stats = harness.service.get_user_stats(user_id).await.unwrap();
    assert_eq!(stats.current_streak, 0);

    // weekly stat is refreshed independently of the streak
    let week = harness.service.get_current_weekly_stat(user_id).await.unwrap();
    assert_eq!(week.total_meals, 1);
}

#[tokio::test]
async fn deleting_the_only_meal_of_the_week_removes_its_stat() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;
    harness.client.push(Ok(analysis_reply(8.0)));

    let logged = harness
        .service
        .log_meal(upload(user_id, MealType::Breakfast))
        .await
        .unwrap();
    harness
        .service
        .delete_meal(user_id, logged.meal.id)
        .await
        .unwrap();

    assert_eq!(harness.store.meal_count().await, 0);
    assert!(harness.objects.keys().await.is_empty());
    assert_eq!(
        harness.service.get_current_weekly_stat(user_id).await,
        Err(CoreError::NotFound)
    );

    // the streak keeps the day
    let stats = harness.service.get_user_stats(user_id).await.unwrap();
    assert_eq!(stats.current_streak, 1);
}

#[tokio::test]
async fn meals_of_other_users_are_not_visible() {
    let owner = Uuid::new_v4();
    let harness = Harness::new().with_profile(owner).await;
    harness.client.push(Ok(analysis_reply(8.0)));

    let logged = harness
        .service
        .log_meal(upload(owner, MealType::Breakfast))
        .await
        .unwrap();

    let stranger = Uuid::new_v4();
    assert_eq!(
        harness.service.get_meal(stranger, logged.meal.id).await,
        Err(CoreError::NotFound)
    );
    assert_eq!(
        harness.service.delete_meal(stranger, logged.meal.id).await,
        Err(CoreError::NotFound)
    );
    assert_eq!(harness.store.meal_count().await, 1);
}

#[tokio::test]
async fn deleting_a_meal_refreshes_the_following_weeks_trend() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;

    harness.client.push(Ok(analysis_reply(4.0)));
    let first_week = harness
        .service
        .log_meal(upload(user_id, MealType::Lunch))
        .await
        .unwrap();

    harness.clock.advance(Duration::weeks(1));
    harness.client.push(Ok(analysis_reply(8.0)));
    harness
        .service
        .log_meal(upload(user_id, MealType::Lunch))
        .await
        .unwrap();

    let week = harness.service.get_current_weekly_stat(user_id).await.unwrap();
    assert_eq!(week.weekly_trend, WeeklyTrend::Improving);

    harness
        .service
        .delete_meal(user_id, first_week.meal.id)
        .await
        .unwrap();

    // nothing left to compare against
    let week = harness.service.get_current_weekly_stat(user_id).await.unwrap();
    assert_eq!(week.weekly_trend, WeeklyTrend::Baseline);
    assert_eq!(week.total_meals, 1);
    assert_eq!(harness.service.get_all_weekly_stats(user_id).await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_uploads_on_one_day_count_once() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;
    harness.client.push(Ok(analysis_reply(6.0)));
    harness.client.push(Ok(analysis_reply(8.0)));

    let (first, second) = tokio::join!(
        harness.service.log_meal(upload(user_id, MealType::Breakfast)),
        harness.service.log_meal(upload(user_id, MealType::Snack)),
    );
    first.unwrap();
    second.unwrap();

    let stats = harness.service.get_user_stats(user_id).await.unwrap();
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.longest_streak, 1);

    let week = harness.service.get_current_weekly_stat(user_id).await.unwrap();
    assert_eq!(week.total_meals, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_uploads_extend_yesterdays_streak_once() {
    let user_id = Uuid::new_v4();
    let harness = Harness::new().with_profile(user_id).await;
    harness
        .store
        .save_streak(UserStreakState {
            user_id,
            current_streak: 1,
            longest_streak: 1,
            last_upload_date: NaiveDate::from_ymd_opt(2025, 11, 11),
        })
        .await
        .unwrap();
    harness.client.push(Ok(analysis_reply(6.0)));
    harness.client.push(Ok(analysis_reply(8.0)));

    let (first, second) = tokio::join!(
        harness.service.log_meal(upload(user_id, MealType::Lunch)),
        harness.service.log_meal(upload(user_id, MealType::Dinner)),
    );
    first.unwrap();
    second.unwrap();

    let stats = harness.service.get_user_stats(user_id).await.unwrap();
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.longest_streak, 2);
    assert_eq!(harness.store.meal_count().await, 2);
}
