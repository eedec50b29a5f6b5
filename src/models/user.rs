//! User models for the identity store.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Standard JWT claim type identifiers attached to seeded users.
pub mod claim_types {
    pub const SUBJECT: &str = "sub";
    pub const NAME: &str = "name";
    pub const GIVEN_NAME: &str = "given_name";
    pub const FAMILY_NAME: &str = "family_name";
    pub const WEBSITE: &str = "website";
}

/// User stored in the identity store. The password credential is opaque
/// here; hashing happens before this struct ever exists.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub email_confirmed: bool,
    pub created_at: DateTime<Utc>,
}

/// A key/value assertion about a principal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserClaim {
    pub claim_type: String,
    pub claim_value: String,
}

impl UserClaim {
    pub fn new(claim_type: &str, claim_value: &str) -> Self {
        Self {
            claim_type: claim_type.to_string(),
            claim_value: claim_value.to_string(),
        }
    }
}

/// User definition as it appears in seed data, password still plaintext.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub claims: Vec<UserClaim>,
}
