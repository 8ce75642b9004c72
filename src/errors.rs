use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Every error the API surfaces to a caller. Each variant carries a stable
/// machine-readable code alongside the human-readable message; all errors are
/// scoped to the failing request and never retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Health metric already exists for this date")]
    DuplicateDate,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("You do not have access to this {0}")]
    AccessDenied(&'static str),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Could not validate credentials")]
    TokenInvalid,

    #[error("Token has expired")]
    TokenExpired,

    #[error("An internal error occurred")]
    TokenCreation(#[from] jsonwebtoken::errors::Error),

    #[error("An internal error occurred")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::DuplicateUsername => "DUPLICATE_USERNAME",
            ApiError::DuplicateEmail => "DUPLICATE_EMAIL",
            ApiError::DuplicateDate => "DUPLICATE_DATE",
            ApiError::NotFound(_) => "RESOURCE_NOT_FOUND",
            ApiError::AccessDenied(_) => "ACCESS_DENIED",
            ApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiError::TokenInvalid => "TOKEN_INVALID",
            ApiError::TokenExpired => "TOKEN_EXPIRED",
            ApiError::TokenCreation(_) | ApiError::Database(_) => "INTERNAL_ERROR",
        }
    }

    fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidCredentials | ApiError::TokenInvalid | ApiError::TokenExpired
        )
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::DuplicateUsername | ApiError::DuplicateEmail | ApiError::DuplicateDate => {
                StatusCode::CONFLICT
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::AccessDenied(_) => StatusCode::FORBIDDEN,
            ApiError::InvalidCredentials | ApiError::TokenInvalid | ApiError::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::TokenCreation(_) | ApiError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Database(e) => tracing::error!("Database error: {:?}", e),
            ApiError::TokenCreation(e) => tracing::error!("Error generating JWT token: {:?}", e),
            _ => {}
        }

        let mut builder = HttpResponse::build(self.status_code());
        if self.is_auth_error() {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        builder.json(json!({
            "detail": {
                "code": self.code(),
                "message": self.to_string(),
            }
        }))
    }
}

/// Map a unique-constraint violation onto the matching CONFLICT error.
/// The storage-level constraint is the authoritative guard: a concurrent
/// insert racing past an application pre-check still ends up here.
pub fn from_unique_violation(e: sqlx::Error) -> ApiError {
    // PostgreSQL unique constraint violation error code is 23505
    let constraint = match &e {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            db_err.constraint().map(str::to_owned)
        }
        _ => None,
    };

    match constraint.as_deref() {
        Some("users_username_key") => ApiError::DuplicateUsername,
        Some("users_email_key") => ApiError::DuplicateEmail,
        Some("unique_user_date") => ApiError::DuplicateDate,
        _ => ApiError::Database(e),
    }
}
