//! Identity resource, API scope, and API resource models.

use serde::Deserialize;

/// A named bundle of user claims releasable under a scope.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityResource {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub user_claims: Vec<String>,
}

/// A named permission clients may request for accessing an API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiScope {
    pub name: String,
    pub display_name: String,
}

/// A protected backend identified for token audience purposes.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResource {
    pub name: String,
    pub display_name: String,
    /// Names of the API scopes that grant access to this resource.
    pub scopes: Vec<String>,
}
