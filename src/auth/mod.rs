//! Credential handling for the identity provider.
//!
//! Client secrets are stored as SHA-256 hex digests and compared in
//! constant time; user passwords are delegated to argon2; token
//! signing lives in [`tokens`].

pub mod passwords;
pub mod tokens;

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Wrapper type for the access-token signing secret.
/// Uses `SecretString` to prevent accidental logging and zeroize on drop.
#[derive(Clone)]
pub struct SigningSecret(SecretString);

impl SigningSecret {
    /// Create a new SigningSecret.
    pub fn new(secret: SecretString) -> Self {
        Self(secret)
    }

    /// Raw key bytes for the JWT encoder/decoder.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.expose_secret().as_bytes()
    }
}

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SigningSecret([REDACTED])")
    }
}

/// Hash a client secret using SHA-256 for storage.
pub fn hash_client_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Securely compare a provided client secret with a stored hash.
///
/// Uses `subtle::ConstantTimeEq` which performs a constant-time
/// byte-by-byte comparison over the hex digests, so neither the matching
/// prefix length nor the digest length leaks through timing.
pub fn verify_client_secret(provided: &str, stored_hash: &str) -> bool {
    let provided_hash = hash_client_secret(provided);
    provided_hash
        .as_bytes()
        .ct_eq(stored_hash.as_bytes())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_hex_sha256() {
        let hash = hash_client_secret("secret");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_verify_round_trip() {
        let hash = hash_client_secret("supersecret");
        assert!(verify_client_secret("supersecret", &hash));
        assert!(!verify_client_secret("wrong", &hash));
    }

    #[test]
    fn test_signing_secret_debug_is_redacted() {
        let secret = SigningSecret::new(SecretString::from("hush".to_string()));
        assert_eq!(format!("{:?}", secret), "SigningSecret([REDACTED])");
    }
}
