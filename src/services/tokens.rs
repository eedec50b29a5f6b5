//! Token issuance for the identity provider's token endpoint.
//!
//! Supports the client_credentials and resource-owner password grants
//! against the seeded configuration and identity stores. Signing is
//! delegated to [`crate::auth::tokens`].

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::auth::{SigningSecret, passwords, tokens, verify_client_secret};
use crate::db;
use crate::error::AppError;
use crate::models::client::{Client, grant_types};
use crate::models::token::AccessClaims;

/// A successfully issued access token.
#[derive(Debug)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: u64,
    pub scope: String,
}

/// Token endpoint failures, mapped onto OAuth2 error codes.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("client authentication failed")]
    InvalidClient,

    #[error("unknown or disallowed grant type")]
    UnsupportedGrantType,

    #[error("client is not allowed to use this grant type")]
    UnauthorizedClient,

    #[error("requested scope exceeds the client's allowed scopes")]
    InvalidScope,

    #[error("invalid resource owner credentials")]
    InvalidGrant,

    #[error("internal error: {0}")]
    Internal(String),
}

impl TokenError {
    /// OAuth2 error code for the JSON error response.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidClient => "invalid_client",
            Self::UnsupportedGrantType => "unsupported_grant_type",
            Self::UnauthorizedClient => "unauthorized_client",
            Self::InvalidScope => "invalid_scope",
            Self::InvalidGrant => "invalid_grant",
            Self::Internal(_) => "server_error",
        }
    }
}

impl From<AppError> for TokenError {
    fn from(err: AppError) -> Self {
        TokenError::Internal(err.to_string())
    }
}

/// Issue a token for the client_credentials grant.
pub async fn client_credentials_grant(
    db: &DatabaseConnection,
    issuer: &str,
    ttl_secs: u64,
    secret: &SigningSecret,
    client_id: &str,
    client_secret: Option<&str>,
    requested_scope: Option<&str>,
) -> Result<IssuedToken, TokenError> {
    let client =
        authenticate_client(db, client_id, client_secret, grant_types::CLIENT_CREDENTIALS).await?;

    let scopes = resolve_scopes(&client, requested_scope)?;
    issue(db, issuer, ttl_secs, secret, &client, client_id, &scopes).await
}

/// Issue a token for the resource-owner password grant.
#[allow(clippy::too_many_arguments)]
pub async fn password_grant(
    db: &DatabaseConnection,
    issuer: &str,
    ttl_secs: u64,
    secret: &SigningSecret,
    client_id: &str,
    client_secret: Option<&str>,
    username: &str,
    password: &str,
    requested_scope: Option<&str>,
) -> Result<IssuedToken, TokenError> {
    let client = authenticate_client(db, client_id, client_secret, grant_types::PASSWORD).await?;
    let scopes = resolve_scopes(&client, requested_scope)?;

    let (user, stored_hash) = db::users::password_hash_for(db, username)
        .await?
        .ok_or(TokenError::InvalidGrant)?;

    if !passwords::verify_password(password, &stored_hash) {
        warn!(username, "password grant rejected: bad credentials");
        return Err(TokenError::InvalidGrant);
    }

    issue(db, issuer, ttl_secs, secret, &client, &user.id, &scopes).await
}

/// Look up a client and check its secret and grant-type allowance.
async fn authenticate_client(
    db: &DatabaseConnection,
    client_id: &str,
    client_secret: Option<&str>,
    grant_type: &str,
) -> Result<Client, TokenError> {
    let client = db::clients::find_by_client_id(db, client_id)
        .await?
        .ok_or(TokenError::InvalidClient)?;

    if let Some(stored_hash) = &client.secret_hash {
        let provided = client_secret.ok_or(TokenError::InvalidClient)?;
        if !verify_client_secret(provided, stored_hash) {
            return Err(TokenError::InvalidClient);
        }
    }

    if !client.allows_grant_type(grant_type) {
        return Err(TokenError::UnauthorizedClient);
    }

    Ok(client)
}

/// Resolve the effective scopes: the requested subset when given, the
/// client's full allowance otherwise.
fn resolve_scopes(client: &Client, requested: Option<&str>) -> Result<Vec<String>, TokenError> {
    match requested {
        Some(raw) => {
            let wanted: Vec<&str> = raw.split_whitespace().collect();
            if !client.allows_scopes(&wanted) {
                return Err(TokenError::InvalidScope);
            }
            Ok(wanted.into_iter().map(|s| s.to_string()).collect())
        }
        None => Ok(client.allowed_scopes.clone()),
    }
}

async fn issue(
    db: &DatabaseConnection,
    issuer: &str,
    ttl_secs: u64,
    secret: &SigningSecret,
    client: &Client,
    subject: &str,
    scopes: &[String],
) -> Result<IssuedToken, TokenError> {
    let scope_refs: Vec<&str> = scopes.iter().map(|s| s.as_str()).collect();
    let aud = db::api_resources::names_for_scopes(db, &scope_refs).await?;

    let now = Utc::now().timestamp() as usize;
    let claims = AccessClaims {
        iss: issuer.to_string(),
        sub: subject.to_string(),
        aud,
        client_id: client.client_id.clone(),
        scope: scopes.join(" "),
        iat: now,
        exp: now + ttl_secs as usize,
    };

    let access_token = tokens::sign_access_token(&claims, secret)
        .map_err(|e| TokenError::Internal(e.to_string()))?;

    Ok(IssuedToken {
        access_token,
        expires_in: ttl_secs,
        scope: claims.scope,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use secrecy::SecretString;
    use uuid::Uuid;

    use crate::auth::hash_client_secret;
    use crate::entity;

    const ISSUER: &str = "https://id.example.com";

    fn signing_secret() -> SigningSecret {
        SigningSecret::new(SecretString::from("unit-test-secret".to_string()))
    }

    fn m2m_client_row(secret: &str) -> entity::client::Model {
        entity::client::Model {
            id: Uuid::new_v4(),
            client_id: "m2m.client".to_string(),
            client_name: "Machine to machine client".to_string(),
            secret_hash: Some(hash_client_secret(secret)),
            allowed_grant_types: "client_credentials".to_string(),
            allowed_scopes: "coffeeshop_api".to_string(),
            redirect_uris: String::new(),
            created_at: Utc::now(),
        }
    }

    fn resource_rows() -> (
        Vec<entity::api_resource_scope::Model>,
        Vec<entity::api_resource::Model>,
    ) {
        let resource_id = Uuid::new_v4();
        (
            vec![entity::api_resource_scope::Model {
                id: Uuid::new_v4(),
                api_resource_id: resource_id,
                scope_name: "coffeeshop_api".to_string(),
            }],
            vec![entity::api_resource::Model {
                id: resource_id,
                name: "coffeeshop".to_string(),
                display_name: "Coffee Shop".to_string(),
                created_at: Utc::now(),
            }],
        )
    }

    #[tokio::test]
    async fn test_client_credentials_grant_issues_scoped_token() {
        let (scope_rows, resources) = resource_rows();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![m2m_client_row("s3cret")]])
            .append_query_results([scope_rows])
            .append_query_results([resources])
            .into_connection();

        let secret = signing_secret();
        let issued = client_credentials_grant(
            &db,
            ISSUER,
            3600,
            &secret,
            "m2m.client",
            Some("s3cret"),
            Some("coffeeshop_api"),
        )
        .await
        .unwrap();

        assert_eq!(issued.scope, "coffeeshop_api");
        assert_eq!(issued.expires_in, 3600);

        let claims =
            crate::auth::tokens::verify_access_token(&issued.access_token, &secret, ISSUER)
                .unwrap();
        assert_eq!(claims.sub, "m2m.client");
        assert_eq!(claims.aud, vec!["coffeeshop".to_string()]);
    }

    #[tokio::test]
    async fn test_wrong_secret_is_invalid_client() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![m2m_client_row("s3cret")]])
            .into_connection();

        let err = client_credentials_grant(
            &db,
            ISSUER,
            3600,
            &signing_secret(),
            "m2m.client",
            Some("wrong"),
            None,
        )
        .await
        .unwrap_err();

        assert_eq!(err.error_code(), "invalid_client");
    }

    #[tokio::test]
    async fn test_unknown_client_is_invalid_client() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::client::Model>::new()])
            .into_connection();

        let err = client_credentials_grant(
            &db,
            ISSUER,
            3600,
            &signing_secret(),
            "ghost",
            Some("s3cret"),
            None,
        )
        .await
        .unwrap_err();

        assert_eq!(err.error_code(), "invalid_client");
    }

    #[tokio::test]
    async fn test_disallowed_grant_type_is_unauthorized_client() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![m2m_client_row("s3cret")]])
            .into_connection();

        let err = password_grant(
            &db,
            ISSUER,
            3600,
            &signing_secret(),
            "m2m.client",
            Some("s3cret"),
            "victoria",
            "Pass123$",
            None,
        )
        .await
        .unwrap_err();

        assert_eq!(err.error_code(), "unauthorized_client");
    }

    #[tokio::test]
    async fn test_excess_scope_is_invalid_scope() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![m2m_client_row("s3cret")]])
            .into_connection();

        let err = client_credentials_grant(
            &db,
            ISSUER,
            3600,
            &signing_secret(),
            "m2m.client",
            Some("s3cret"),
            Some("coffeeshop_api admin_api"),
        )
        .await
        .unwrap_err();

        assert_eq!(err.error_code(), "invalid_scope");
    }
}
