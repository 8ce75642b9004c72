use bcrypt::{hash, verify, DEFAULT_COST};

/// Salted bcrypt hash; every call draws a fresh salt, so hashing the same
/// password twice yields different strings.
pub fn hash_password(password: &str) -> String {
    hash(password, DEFAULT_COST).expect("Failed to hash password")
}

/// Recomputes with the salt embedded in `hash` and compares in constant
/// time. A malformed hash verifies as false rather than erroring.
pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password, hash).unwrap_or(false)
}
