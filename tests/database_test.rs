// ABOUTME: Integration tests for the SQLite storage layer
// ABOUTME: User profile round-trips and food-log inserts on in-memory databases
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Storage tests for `nutritrack_server`

mod common;

use common::{create_test_database, unique_user_id};
use nutritrack_server::database::{FoodLogEntry, UserProfile};

fn sample_entry(user_id: &str) -> FoodLogEntry {
    FoodLogEntry {
        user_id: user_id.to_string(),
        food_name: "Oatmeal".to_string(),
        calories: 150.0,
        protein: 5.0,
        carbs: 27.0,
        fat: 3.0,
        meal_type: "breakfast".to_string(),
        log_date: "2025-06-01".to_string(),
        log_time: "8:05:00 AM".to_string(),
        scanned: false,
        confidence: "85%".to_string(),
    }
}

#[tokio::test]
async fn test_get_unknown_user_returns_none() {
    let database = create_test_database().await.unwrap();
    let profile = database.get_user("missing").await.unwrap();
    assert!(profile.is_none());
}

#[tokio::test]
async fn test_user_profile_round_trip() {
    let database = create_test_database().await.unwrap();
    let user_id = unique_user_id();

    database
        .upsert_user(&UserProfile {
            id: user_id.clone(),
            goal: Some("weight_loss".to_string()),
            daily_calories: Some(1800),
        })
        .await
        .unwrap();

    let profile = database.get_user(&user_id).await.unwrap().unwrap();
    assert_eq!(profile.id, user_id);
    assert_eq!(profile.goal.as_deref(), Some("weight_loss"));
    assert_eq!(profile.daily_calories, Some(1800));
}

#[tokio::test]
async fn test_upsert_updates_existing_user() {
    let database = create_test_database().await.unwrap();
    let user_id = unique_user_id();

    database
        .upsert_user(&UserProfile {
            id: user_id.clone(),
            goal: Some("maintenance".to_string()),
            daily_calories: None,
        })
        .await
        .unwrap();
    database
        .upsert_user(&UserProfile {
            id: user_id.clone(),
            goal: Some("muscle_gain".to_string()),
            daily_calories: Some(3000),
        })
        .await
        .unwrap();

    let profile = database.get_user(&user_id).await.unwrap().unwrap();
    assert_eq!(profile.goal.as_deref(), Some("muscle_gain"));
    assert_eq!(profile.daily_calories, Some(3000));
}

#[tokio::test]
async fn test_log_food_assigns_increasing_ids() {
    let database = create_test_database().await.unwrap();
    let user_id = unique_user_id();

    let first = database.log_food(&sample_entry(&user_id)).await.unwrap();
    let second = database.log_food(&sample_entry(&user_id)).await.unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[tokio::test]
async fn test_migrate_is_idempotent() {
    let database = create_test_database().await.unwrap();
    // Running migrations again must not fail or clobber data
    let user_id = unique_user_id();
    database
        .upsert_user(&UserProfile {
            id: user_id.clone(),
            goal: None,
            daily_calories: None,
        })
        .await
        .unwrap();

    database.migrate().await.unwrap();
    assert!(database.get_user(&user_id).await.unwrap().is_some());
}
