use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::db::users::{find_user_by_email, find_user_by_username, insert_user};
use crate::errors::{from_unique_violation, ApiError};
use crate::models::user::{RegistrationRequest, UserResponse};
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Register a new user",
    skip(user_form, pool),
    fields(username = %user_form.username)
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    user_form.validate()?;

    // Pre-checks give the caller a precise 409; the unique constraints
    // catch anything that races past them and map to the same response
    if find_user_by_username(&pool, &user_form.username)
        .await?
        .is_some()
    {
        return Err(ApiError::DuplicateUsername);
    }
    if find_user_by_email(&pool, &user_form.email).await?.is_some() {
        return Err(ApiError::DuplicateEmail);
    }

    let password_hash = hash_password(user_form.password.expose_secret());
    let user = insert_user(&pool, &user_form.username, &user_form.email, &password_hash)
        .await
        .map_err(from_unique_violation)?;

    tracing::info!("New user registered: {}", user.id);
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}
