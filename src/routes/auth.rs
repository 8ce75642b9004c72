use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::config::jwt::JwtSettings;
use crate::errors::ApiError;
use crate::handlers::auth_handler::{current_user_info, login_user};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::auth::LoginRequest;

#[post("/login")]
async fn login(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, ApiError> {
    login_user(login_form, pool, jwt_settings).await
}

#[get("/me")]
async fn me(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ApiError> {
    current_user_info(pool, user).await
}
