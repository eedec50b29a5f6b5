//! Access token signing and verification.
//!
//! Tokens are HS256 JWTs produced with the jsonwebtoken crate; the
//! signing secret comes from configuration. Audience validation is left
//! to resource servers, so decoding here only pins algorithm and issuer.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::error::{AppError, AppResult};
use crate::models::token::AccessClaims;

use super::SigningSecret;

/// Sign an access token.
pub fn sign_access_token(claims: &AccessClaims, secret: &SigningSecret) -> AppResult<String> {
    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &key)
        .map_err(|e| AppError::Unauthorized(format!("token signing failed: {}", e)))
}

/// Verify an access token and return its claims.
pub fn verify_access_token(
    token: &str,
    secret: &SigningSecret,
    issuer: &str,
) -> AppResult<AccessClaims> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[issuer]);
    validation.validate_aud = false;

    decode::<AccessClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| AppError::Unauthorized(format!("invalid access token: {}", e)))
}
