use once_cell::sync::Lazy;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use uuid::Uuid;

use fittrack_backend::config::settings::{get_config, get_jwt_settings, DatabaseSettings};
use fittrack_backend::run;
use fittrack_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    let connection_pool = configure_db(&configuration.database).await;
    let jwt_settings = get_jwt_settings(&configuration);

    let server = run(listener, connection_pool.clone(), jwt_settings)
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// Register a fresh user and log them in, returning (bearer token, user id,
/// username).
pub async fn register_and_login(app_address: &str) -> (String, Uuid, String) {
    let client = Client::new();
    let username = format!("testuser{}", Uuid::new_v4().simple());
    let password = "password123";
    let email = format!("{}@example.com", username);

    let register_response = client
        .post(format!("{}/auth/register", app_address))
        .json(&json!({
            "username": username,
            "email": email,
            "password": password,
        }))
        .send()
        .await
        .expect("Failed to register user.");
    assert_eq!(register_response.status().as_u16(), 201);
    let user: serde_json::Value = register_response
        .json()
        .await
        .expect("Failed to parse registration response.");
    let user_id = Uuid::parse_str(user["id"].as_str().unwrap()).unwrap();

    let login_response = client
        .post(format!("{}/auth/login", app_address))
        .json(&json!({
            "username": username,
            "password": password,
        }))
        .send()
        .await
        .expect("Failed to log in.");
    assert_eq!(login_response.status().as_u16(), 200);
    let body: serde_json::Value = login_response
        .json()
        .await
        .expect("Failed to parse login response.");
    let token = body["access_token"].as_str().unwrap().to_string();

    (token, user_id, username)
}
