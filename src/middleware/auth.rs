use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{http::header, web, Error, HttpMessage};
use chrono::Utc;
use futures_util::future::LocalBoxFuture;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::decode_token;
use crate::config::jwt::JwtSettings;
use crate::db::users::user_exists;
use crate::errors::ApiError;
use crate::models::user::TokenClaims;

/// Identity resolved by the access guard, stored in request extensions for
/// handlers to pick up via `web::ReqData<AuthenticatedUser>`.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Extract and validate the bearer token from the request. Missing or
/// malformed credentials and bad signatures are indistinguishable to the
/// caller; only a genuinely expired token gets its own error code.
pub fn validate_jwt_from_request(req: &ServiceRequest) -> Result<TokenClaims, ApiError> {
    let jwt_settings = req
        .app_data::<web::Data<JwtSettings>>()
        .ok_or(ApiError::TokenInvalid)?;

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(ApiError::TokenInvalid)?
        .to_str()
        .map_err(|_| ApiError::TokenInvalid)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::TokenInvalid)?
        .trim();
    if token.is_empty() {
        return Err(ApiError::TokenInvalid);
    }

    let claims = decode_token(token, jwt_settings).map_err(|e| {
        tracing::info!("Failed to decode token: {:?}", e);
        ApiError::TokenInvalid
    })?;

    if (claims.exp as i64) < Utc::now().timestamp() {
        return Err(ApiError::TokenExpired);
    }

    Ok(claims)
}

// Create the middleware
pub struct AuthMiddleware;

// Middleware factory
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let claims = validate_jwt_from_request(&req)?;

            // A well-signed token whose subject no longer resolves to a user
            // is as invalid as a bad signature
            let user_id = claims.user_id().ok_or(ApiError::TokenInvalid)?;
            let pool = req
                .app_data::<web::Data<PgPool>>()
                .ok_or(ApiError::TokenInvalid)?;
            let exists = user_exists(pool, user_id)
                .await
                .map_err(ApiError::Database)?;
            if !exists {
                return Err(ApiError::TokenInvalid.into());
            }

            req.extensions_mut().insert(AuthenticatedUser { user_id });

            service.call(req).await
        })
    }
}
