use secrecy::SecretString;
use serde::Deserialize;

/// Signing configuration for session tokens. Built once at startup and
/// handed to the token service by reference, never read from globals.
#[derive(Debug, Deserialize)]
pub struct JwtSettings {
    pub secret: SecretString,
    pub expiration_hours: i64,
}

impl JwtSettings {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret: SecretString::new(secret.into_boxed_str()),
            expiration_hours,
        }
    }
}
