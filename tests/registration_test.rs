use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::spawn_app;

#[tokio::test]
async fn register_user_working() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let username = format!("newuser{}", Uuid::new_v4().simple());
    let email = format!("{}@example.com", username);

    let response = client
        .post(format!("{}/auth/register", &test_app.address))
        .json(&json!({
            "username": username,
            "email": email,
            "password": "password123",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response.");
    assert_eq!(body["username"], json!(username));
    assert_eq!(body["email"], json!(email));
    assert!(body["id"].as_str().is_some());
    assert!(body.get("password_hash").is_none());

    let saved: (String, String) =
        sqlx::query_as("SELECT username, email FROM users WHERE username = $1")
            .bind(&username)
            .fetch_one(&test_app.db_pool)
            .await
            .expect("Failed to fetch saved user.");
    assert_eq!(saved.0, username);
    assert_eq!(saved.1, email);
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let username = format!("dupuser{}", Uuid::new_v4().simple());

    let first = client
        .post(format!("{}/auth/register", &test_app.address))
        .json(&json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "password123",
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(first.status().as_u16(), 201);

    // Same username, different email
    let second = client
        .post(format!("{}/auth/register", &test_app.address))
        .json(&json!({
            "username": username,
            "email": format!("other-{}@example.com", username),
            "password": "password123",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(second.status().as_u16(), 409);
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(body["detail"]["code"], "DUPLICATE_USERNAME");
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let username = format!("mailuser{}", Uuid::new_v4().simple());
    let email = format!("{}@example.com", username);

    let first = client
        .post(format!("{}/auth/register", &test_app.address))
        .json(&json!({
            "username": username,
            "email": email,
            "password": "password123",
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(first.status().as_u16(), 201);

    // Different username, same email
    let second = client
        .post(format!("{}/auth/register", &test_app.address))
        .json(&json!({
            "username": format!("other{}", Uuid::new_v4().simple()),
            "email": email,
            "password": "password123",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(second.status().as_u16(), 409);
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(body["detail"]["code"], "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn invalid_registrations_are_rejected_before_persistence() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let cases = vec![
        (
            json!({"username": "ab", "email": "ab@example.com", "password": "password123"}),
            "username too short",
        ),
        (
            json!({"username": "validname", "email": "not-an-email", "password": "password123"}),
            "malformed email",
        ),
        (
            json!({"username": "validname", "email": "valid@example.com", "password": "short"}),
            "password too short",
        ),
    ];

    for (payload, description) in cases {
        let response = client
            .post(format!("{}/auth/register", &test_app.address))
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(
            response.status().as_u16(),
            422,
            "expected 422 for case: {}",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["detail"]["code"], "VALIDATION_ERROR");
    }

    let user_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to count users.");
    assert_eq!(user_count.0, 0);
}
