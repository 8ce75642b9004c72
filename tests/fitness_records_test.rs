use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::{register_and_login, spawn_app};

#[tokio::test]
async fn create_fitness_record_works() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (token, user_id, _) = register_and_login(&test_app.address).await;

    let today = Utc::now().date_naive();
    let response = client
        .post(format!("{}/fitness-records", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "date": today,
            "workout_type": "running",
            "duration_minutes": 30,
            "calories_burned": 300,
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["id"].as_str().is_some());
    assert_eq!(body["user_id"], json!(user_id.to_string()));
    assert_eq!(body["date"], json!(today));
    assert_eq!(body["workout_type"], "running");
    assert_eq!(body["intensity_level"], "medium");
    assert_eq!(body["updated_at"], body["created_at"]);
}

#[tokio::test]
async fn future_dated_record_is_rejected_before_persistence() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (token, _, _) = register_and_login(&test_app.address).await;

    let tomorrow = Utc::now().date_naive() + Duration::days(1);
    let response = client
        .post(format!("{}/fitness-records", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "date": tomorrow,
            "workout_type": "running",
            "duration_minutes": 30,
            "calories_burned": 300,
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["detail"]["code"], "VALIDATION_ERROR");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM fitness_records")
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to count records.");
    assert_eq!(count.0, 0);
}

#[tokio::test]
async fn out_of_range_fields_are_rejected() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (token, _, _) = register_and_login(&test_app.address).await;

    let today = Utc::now().date_naive();
    let cases = vec![
        json!({"date": today, "workout_type": "running", "duration_minutes": 0, "calories_burned": 300}),
        json!({"date": today, "workout_type": "running", "duration_minutes": 1441, "calories_burned": 300}),
        json!({"date": today, "workout_type": "running", "duration_minutes": 30, "calories_burned": 10001}),
        json!({"date": today, "workout_type": "running", "duration_minutes": 30, "calories_burned": 300, "distance_km": 1000.5}),
        json!({"date": today, "workout_type": "", "duration_minutes": 30, "calories_burned": 300}),
    ];

    for payload in cases {
        let response = client
            .post(format!("{}/fitness-records", &test_app.address))
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 422, "payload: {}", payload);
    }
}

#[tokio::test]
async fn listing_filters_by_workout_type() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (token, _, _) = register_and_login(&test_app.address).await;

    let today = Utc::now().date_naive();
    for workout_type in ["running", "cycling"] {
        let response = client
            .post(format!("{}/fitness-records", &test_app.address))
            .bearer_auth(&token)
            .json(&json!({
                "date": today,
                "workout_type": workout_type,
                "duration_minutes": 30,
                "calories_burned": 300,
            }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 201);
    }

    let running: Vec<serde_json::Value> = client
        .get(format!("{}/fitness-records", &test_app.address))
        .bearer_auth(&token)
        .query(&[("workout_type", "running")])
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(running.len(), 1);
    assert_eq!(running[0]["workout_type"], "running");

    let swimming: Vec<serde_json::Value> = client
        .get(format!("{}/fitness-records", &test_app.address))
        .bearer_auth(&token)
        .query(&[("workout_type", "swimming")])
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert!(swimming.is_empty());
}

#[tokio::test]
async fn listing_orders_by_date_descending_and_paginates() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (token, _, _) = register_and_login(&test_app.address).await;

    let today = Utc::now().date_naive();
    for days_ago in [2, 0, 1] {
        let response = client
            .post(format!("{}/fitness-records", &test_app.address))
            .bearer_auth(&token)
            .json(&json!({
                "date": today - Duration::days(days_ago),
                "workout_type": "running",
                "duration_minutes": 30,
                "calories_burned": 300,
            }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 201);
    }

    let all: Vec<serde_json::Value> = client
        .get(format!("{}/fitness-records", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0]["date"], json!(today));
    assert_eq!(all[1]["date"], json!(today - Duration::days(1)));
    assert_eq!(all[2]["date"], json!(today - Duration::days(2)));

    // Second page of size one is the middle record
    let page: Vec<serde_json::Value> = client
        .get(format!("{}/fitness-records", &test_app.address))
        .bearer_auth(&token)
        .query(&[("limit", "1"), ("offset", "1")])
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["date"], json!(today - Duration::days(1)));

    // Date-range filter excludes the oldest record
    let filtered: Vec<serde_json::Value> = client
        .get(format!("{}/fitness-records", &test_app.address))
        .bearer_auth(&token)
        .query(&[("start_date", &(today - Duration::days(1)).to_string())])
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(filtered.len(), 2);
}

#[tokio::test]
async fn out_of_range_pagination_is_rejected() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (token, _, _) = register_and_login(&test_app.address).await;

    for query in [("limit", "0"), ("limit", "1001"), ("offset", "-1")] {
        let response = client
            .get(format!("{}/fitness-records", &test_app.address))
            .bearer_auth(&token)
            .query(&[query])
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 422, "query: {:?}", query);
    }
}

#[tokio::test]
async fn unknown_record_id_returns_404() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (token, _, _) = register_and_login(&test_app.address).await;

    let missing_id = Uuid::new_v4();
    let response = client
        .get(format!(
            "{}/fitness-records/{}",
            &test_app.address, missing_id
        ))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["detail"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn cross_user_access_is_denied_with_403() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let (owner_token, _, _) = register_and_login(&test_app.address).await;
    let (intruder_token, _, _) = register_and_login(&test_app.address).await;

    let created: serde_json::Value = client
        .post(format!("{}/fitness-records", &test_app.address))
        .bearer_auth(&owner_token)
        .json(&json!({
            "date": Utc::now().date_naive(),
            "workout_type": "running",
            "duration_minutes": 30,
            "calories_burned": 300,
        }))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    let record_id = created["id"].as_str().unwrap();

    // The record exists, so a non-owner sees 403, not 404
    let get = client
        .get(format!("{}/fitness-records/{}", &test_app.address, record_id))
        .bearer_auth(&intruder_token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(get.status().as_u16(), 403);
    let body: serde_json::Value = get.json().await.unwrap();
    assert_eq!(body["detail"]["code"], "ACCESS_DENIED");

    let update = client
        .put(format!("{}/fitness-records/{}", &test_app.address, record_id))
        .bearer_auth(&intruder_token)
        .json(&json!({"duration_minutes": 60}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(update.status().as_u16(), 403);

    let delete = client
        .delete(format!("{}/fitness-records/{}", &test_app.address, record_id))
        .bearer_auth(&intruder_token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(delete.status().as_u16(), 403);

    // Untouched for the owner
    let still_there = client
        .get(format!("{}/fitness-records/{}", &test_app.address, record_id))
        .bearer_auth(&owner_token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(still_there.status().as_u16(), 200);
    let body: serde_json::Value = still_there.json().await.unwrap();
    assert_eq!(body["duration_minutes"], 30);
}

#[tokio::test]
async fn partial_update_changes_only_named_fields() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (token, _, _) = register_and_login(&test_app.address).await;

    let created: serde_json::Value = client
        .post(format!("{}/fitness-records", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "date": Utc::now().date_naive(),
            "workout_type": "running",
            "duration_minutes": 30,
            "calories_burned": 300,
            "distance_km": 5.0,
            "notes": "easy pace",
        }))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    let record_id = created["id"].as_str().unwrap();

    let response = client
        .put(format!("{}/fitness-records/{}", &test_app.address, record_id))
        .bearer_auth(&token)
        .json(&json!({"duration_minutes": 45}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["duration_minutes"], 45);
    assert_eq!(updated["workout_type"], "running");
    assert_eq!(updated["calories_burned"], 300);
    assert_eq!(updated["distance_km"], 5.0);
    assert_eq!(updated["notes"], "easy pace");
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_ne!(updated["updated_at"], created["updated_at"]);
}

#[tokio::test]
async fn delete_removes_the_record() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (token, _, _) = register_and_login(&test_app.address).await;

    let created: serde_json::Value = client
        .post(format!("{}/fitness-records", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "date": Utc::now().date_naive(),
            "workout_type": "running",
            "duration_minutes": 30,
            "calories_burned": 300,
        }))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    let record_id = created["id"].as_str().unwrap();

    let delete = client
        .delete(format!("{}/fitness-records/{}", &test_app.address, record_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(delete.status().as_u16(), 204);

    let get = client
        .get(format!("{}/fitness-records/{}", &test_app.address, record_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(get.status().as_u16(), 404);
}
