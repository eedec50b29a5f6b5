//! Client models.

use serde::Deserialize;

/// OAuth2 grant type identifiers used in client configuration.
pub mod grant_types {
    pub const CLIENT_CREDENTIALS: &str = "client_credentials";
    pub const AUTHORIZATION_CODE: &str = "authorization_code";
    pub const PASSWORD: &str = "password";
}

/// Client as stored in the configuration store.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    /// SHA-256 hex digest of the shared secret; None for public clients.
    pub secret_hash: Option<String>,
    pub allowed_grant_types: Vec<String>,
    pub allowed_scopes: Vec<String>,
    pub redirect_uris: Vec<String>,
}

impl Client {
    /// Check whether a grant type is allowed for this client.
    pub fn allows_grant_type(&self, grant_type: &str) -> bool {
        self.allowed_grant_types.iter().any(|g| g == grant_type)
    }

    /// Check whether every requested scope is allowed for this client.
    pub fn allows_scopes(&self, requested: &[&str]) -> bool {
        requested
            .iter()
            .all(|s| self.allowed_scopes.iter().any(|a| a == s))
    }
}

/// Client definition as it appears in seed data, with the shared secret
/// still in plaintext. The secret is hashed on insert and never stored.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSeed {
    pub client_id: String,
    pub client_name: String,
    #[serde(default)]
    pub secret: Option<String>,
    pub allowed_grant_types: Vec<String>,
    pub allowed_scopes: Vec<String>,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}
