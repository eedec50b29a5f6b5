//! Seed data for the bootstrap procedure.
//!
//! The seeders take this struct as an explicit parameter instead of
//! reading compiled-in globals, so an operator can point `SHOP_SEED_FILE`
//! at a JSON document with the same shape and seed a different set
//! without recompiling. `builtin()` is the default demo set.

use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::client::{ClientSeed, grant_types};
use crate::models::resource::{ApiResource, ApiScope, IdentityResource};
use crate::models::user::{SeedUser, UserClaim, claim_types};

/// The full fixed set consumed by the bootstrap orchestrator.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub clients: Vec<ClientSeed>,
    pub identity_resources: Vec<IdentityResource>,
    pub api_scopes: Vec<ApiScope>,
    pub api_resources: Vec<ApiResource>,
    pub demo_user: SeedUser,
}

impl SeedData {
    /// The built-in demo configuration: two clients, the standard openid
    /// and profile identity resources, one API scope and resource for the
    /// coffee shop API, and one demo user.
    pub fn builtin() -> Self {
        SeedData {
            clients: vec![
                ClientSeed {
                    client_id: "m2m.client".to_string(),
                    client_name: "Machine to machine client".to_string(),
                    secret: Some("511536EF-F270-4058-80CA-1C89C192F69A".to_string()),
                    allowed_grant_types: vec![grant_types::CLIENT_CREDENTIALS.to_string()],
                    allowed_scopes: vec!["coffeeshop_api".to_string()],
                    redirect_uris: vec![],
                },
                ClientSeed {
                    client_id: "interactive.web".to_string(),
                    client_name: "Interactive web client".to_string(),
                    secret: Some("49C1A7E1-0C79-4A89-A3D6-A37998FB86B0".to_string()),
                    allowed_grant_types: vec![
                        grant_types::AUTHORIZATION_CODE.to_string(),
                        grant_types::PASSWORD.to_string(),
                    ],
                    allowed_scopes: vec![
                        "openid".to_string(),
                        "profile".to_string(),
                        "coffeeshop_api".to_string(),
                    ],
                    redirect_uris: vec!["https://localhost:5444/signin-oidc".to_string()],
                },
            ],
            identity_resources: vec![
                IdentityResource {
                    name: "openid".to_string(),
                    display_name: "Your user identifier".to_string(),
                    user_claims: vec![claim_types::SUBJECT.to_string()],
                },
                IdentityResource {
                    name: "profile".to_string(),
                    display_name: "User profile".to_string(),
                    user_claims: vec![
                        claim_types::NAME.to_string(),
                        claim_types::GIVEN_NAME.to_string(),
                        claim_types::FAMILY_NAME.to_string(),
                        claim_types::WEBSITE.to_string(),
                    ],
                },
            ],
            api_scopes: vec![ApiScope {
                name: "coffeeshop_api".to_string(),
                display_name: "Coffee Shop API".to_string(),
            }],
            api_resources: vec![ApiResource {
                name: "coffeeshop".to_string(),
                display_name: "Coffee Shop".to_string(),
                scopes: vec!["coffeeshop_api".to_string()],
            }],
            demo_user: SeedUser {
                username: "victoria".to_string(),
                email: "victoria.secret@keymail.com".to_string(),
                password: "Pass123$".to_string(),
                claims: vec![
                    UserClaim::new(claim_types::NAME, "Victoria Secret"),
                    UserClaim::new(claim_types::GIVEN_NAME, "Victoria"),
                    UserClaim::new(claim_types::FAMILY_NAME, "Secret"),
                    UserClaim::new(claim_types::WEBSITE, "http://victoriasecret.com"),
                    UserClaim::new("location", "somewhere"),
                ],
            },
        }
    }

    /// Load seed data from a JSON file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Seed(format!("cannot read seed file {}: {}", path.display(), e))
        })?;
        let data: SeedData = serde_json::from_str(&raw)
            .map_err(|e| AppError::Seed(format!("invalid seed file {}: {}", path.display(), e)))?;
        Ok(data)
    }

    /// Resolve the seed set: a file when configured, the built-in set
    /// otherwise.
    pub fn load(seed_file: Option<&Path>) -> AppResult<Self> {
        match seed_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_api_resource_scopes_exist() {
        // Every scope referenced by an API resource must be defined in the
        // API scope set, or seeding from empty would trip the FK.
        let seed = SeedData::builtin();
        for resource in &seed.api_resources {
            for scope in &resource.scopes {
                assert!(
                    seed.api_scopes.iter().any(|s| &s.name == scope),
                    "API resource '{}' references undefined scope '{}'",
                    resource.name,
                    scope
                );
            }
        }
    }

    #[test]
    fn test_builtin_client_scopes_are_defined() {
        let seed = SeedData::builtin();
        let known: Vec<&str> = seed
            .identity_resources
            .iter()
            .map(|r| r.name.as_str())
            .chain(seed.api_scopes.iter().map(|s| s.name.as_str()))
            .collect();

        for client in &seed.clients {
            for scope in &client.allowed_scopes {
                assert!(
                    known.contains(&scope.as_str()),
                    "client '{}' allows undefined scope '{}'",
                    client.client_id,
                    scope
                );
            }
        }
    }

    #[test]
    fn test_builtin_demo_user_shape() {
        let seed = SeedData::builtin();
        assert_eq!(seed.demo_user.username, "victoria");
        assert_eq!(seed.demo_user.claims.len(), 5);
    }

    #[test]
    fn test_load_from_file() {
        let json = r#"{
            "clients": [{
                "client_id": "cli",
                "client_name": "CLI",
                "secret": "s3cret",
                "allowed_grant_types": ["client_credentials"],
                "allowed_scopes": ["coffeeshop_api"]
            }],
            "identity_resources": [],
            "api_scopes": [{"name": "coffeeshop_api", "display_name": "Coffee Shop API"}],
            "api_resources": [],
            "demo_user": {
                "username": "demo",
                "email": "demo@example.com",
                "password": "Demo1234$"
            }
        }"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let seed = SeedData::from_file(file.path()).unwrap();
        assert_eq!(seed.clients.len(), 1);
        assert_eq!(seed.clients[0].client_id, "cli");
        assert!(seed.demo_user.claims.is_empty());
    }

    #[test]
    fn test_load_defaults_to_builtin() {
        let seed = SeedData::load(None).unwrap();
        assert_eq!(seed.clients.len(), 2);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = SeedData::from_file(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read seed file"));
    }
}
