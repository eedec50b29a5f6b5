//! Password hashing via argon2.
//!
//! The hash format is opaque to the rest of the system; storage keeps the
//! PHC string produced here and verification parses it back.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{AppError, AppResult};

/// Hash a plaintext password for storage.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Seed(format!("password hashing failed: {}", e)))?
        .to_string();
    Ok(hash)
}

/// Verify a plaintext password against a stored PHC hash string.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("Pass123$").expect("hashing should succeed");
        assert!(verify_password("Pass123$", &hash));
        assert!(!verify_password("wrong-password", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("Pass123$").unwrap();
        let b = hash_password("Pass123$").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify_password("Pass123$", "not-a-phc-string"));
    }
}
