use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::auth::jwt::generate_token;
use crate::config::jwt::JwtSettings;
use crate::db::users::{find_user_by_id, find_user_by_username};
use crate::errors::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::auth::{LoginRequest, TokenResponse};
use crate::models::user::UserResponse;
use crate::utils::password::verify_password;

#[tracing::instrument(
    name = "Login user attempt",
    skip(login_form, pool, jwt_settings),
    fields(username = %login_form.username)
)]
pub async fn login_user(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, ApiError> {
    let user = match find_user_by_username(&pool, &login_form.username).await? {
        Some(user) => user,
        None => {
            tracing::info!("User not found or invalid credentials");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(login_form.password.expose_secret(), &user.password_hash) {
        tracing::info!("Invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = generate_token(user.id, &jwt_settings)?;

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
}

#[tracing::instrument(name = "Get current user", skip(pool, user), fields(user_id = %user.user_id))]
pub async fn current_user_info(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ApiError> {
    // The guard already resolved the subject; a vanished user between then
    // and now reads as an invalid token
    let user = find_user_by_id(&pool, user.user_id)
        .await?
        .ok_or(ApiError::TokenInvalid)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
