use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use uuid::Uuid;

use crate::config::jwt::JwtSettings;
use crate::models::user::TokenClaims;

/// Issue a signed session token for `user_id`, expiring
/// `expiration_hours` from now.
pub fn generate_token(
    user_id: Uuid,
    jwt_settings: &JwtSettings,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(jwt_settings.expiration_hours);

    let claims = TokenClaims {
        sub: user_id.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
    )
}

/// Verify signature and well-formedness, returning the embedded claims.
/// Expiry is NOT checked here; the access guard owns the
/// expired-vs-invalid distinction.
pub fn decode_token(
    token: &str,
    jwt_settings: &JwtSettings,
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}
