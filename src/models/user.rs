use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::ApiError;

#[derive(Debug, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public view of a user account. The password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    #[serde(deserialize_with = "deserialize_secret_string")]
    pub password: SecretString,
}

impl RegistrationRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let username_len = self.username.chars().count();
        if !(3..=50).contains(&username_len) {
            return Err(ApiError::Validation(
                "username must be between 3 and 50 characters".into(),
            ));
        }
        if !is_plausible_email(&self.email) {
            return Err(ApiError::Validation("email is not a valid address".into()));
        }
        let password_len = self.password.expose_secret().chars().count();
        if !(6..=100).contains(&password_len) {
            return Err(ApiError::Validation(
                "password must be between 6 and 100 characters".into(),
            ));
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    if email.is_empty() || email.chars().count() > 100 {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Claims embedded in a session token: subject (user id), expiry and
/// issued-at, both as UTC timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

impl TokenClaims {
    /// Parse the user ID from the claims subject field.
    /// Returns None if the UUID is invalid.
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

pub fn deserialize_secret_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(SecretString::new(s.into_boxed_str()))
}
