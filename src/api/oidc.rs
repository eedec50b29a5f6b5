//! OIDC-style endpoints for the identity provider host.
//!
//! Discovery, token, and userinfo. Protocol coverage is deliberately
//! narrow: the discovery document advertises only what this provider
//! actually serves, and the token endpoint supports the
//! client_credentials and password grants.

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use sea_orm::DatabaseConnection;
use serde_json::{Map, Value, json};
use tracing::info;

use crate::auth::{SigningSecret, tokens as token_signing};
use crate::config::Config;
use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::client::grant_types;
use crate::models::token::{DiscoveryDocument, TokenRequest, TokenResponse};
use crate::models::user::claim_types;
use crate::services::tokens::{self, TokenError};

/// Configure OIDC routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(discovery).service(token).service(userinfo);
}

/// OIDC discovery document.
///
/// GET /.well-known/openid-configuration
#[get("/.well-known/openid-configuration")]
pub async fn discovery(
    config: web::Data<Config>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let identity_resources = db::identity_resources::list(db.get_ref()).await?;
    let api_scope_names = db::api_scopes::list_names(db.get_ref()).await?;

    let mut scopes_supported: Vec<String> = identity_resources
        .iter()
        .map(|r| r.name.clone())
        .collect();
    scopes_supported.extend(api_scope_names);

    let mut claims_supported = vec![claim_types::SUBJECT.to_string()];
    for resource in &identity_resources {
        for claim in &resource.user_claims {
            if !claims_supported.contains(claim) {
                claims_supported.push(claim.clone());
            }
        }
    }

    let issuer = config.issuer.clone();
    let doc = DiscoveryDocument {
        token_endpoint: format!("{}/connect/token", issuer),
        userinfo_endpoint: format!("{}/connect/userinfo", issuer),
        issuer,
        grant_types_supported: vec![
            grant_types::CLIENT_CREDENTIALS.to_string(),
            grant_types::PASSWORD.to_string(),
        ],
        scopes_supported,
        claims_supported,
        token_endpoint_auth_methods_supported: vec!["client_secret_post".to_string()],
    };

    Ok(HttpResponse::Ok().json(doc))
}

/// Token endpoint.
///
/// POST /connect/token (application/x-www-form-urlencoded)
#[post("/connect/token")]
pub async fn token(
    config: web::Data<Config>,
    db: web::Data<DatabaseConnection>,
    secret: web::Data<SigningSecret>,
    form: web::Form<TokenRequest>,
) -> HttpResponse {
    let request = form.into_inner();

    let client_id = match request.client_id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return token_error_response(&TokenError::InvalidClient),
    };

    let result = match request.grant_type.as_str() {
        grant_types::CLIENT_CREDENTIALS => {
            tokens::client_credentials_grant(
                db.get_ref(),
                &config.issuer,
                config.token_ttl_secs,
                secret.get_ref(),
                client_id,
                request.client_secret.as_deref(),
                request.scope.as_deref(),
            )
            .await
        }
        grant_types::PASSWORD => {
            let (username, password) = match (&request.username, &request.password) {
                (Some(u), Some(p)) => (u.as_str(), p.as_str()),
                _ => return token_error_response(&TokenError::InvalidGrant),
            };
            tokens::password_grant(
                db.get_ref(),
                &config.issuer,
                config.token_ttl_secs,
                secret.get_ref(),
                client_id,
                request.client_secret.as_deref(),
                username,
                password,
                request.scope.as_deref(),
            )
            .await
        }
        _ => Err(TokenError::UnsupportedGrantType),
    };

    match result {
        Ok(issued) => {
            info!(client_id, "issued access token");
            HttpResponse::Ok().json(TokenResponse {
                access_token: issued.access_token,
                token_type: "Bearer".to_string(),
                expires_in: issued.expires_in,
                scope: issued.scope,
            })
        }
        Err(err) => token_error_response(&err),
    }
}

/// Userinfo endpoint.
///
/// GET /connect/userinfo with a Bearer access token whose subject is a
/// seeded user. Returns the subject plus the stored claims flattened
/// into one JSON object.
#[get("/connect/userinfo")]
pub async fn userinfo(
    req: HttpRequest,
    config: web::Data<Config>,
    db: web::Data<DatabaseConnection>,
    secret: web::Data<SigningSecret>,
) -> AppResult<HttpResponse> {
    let access_token = bearer_token(&req)
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))?;

    let claims =
        token_signing::verify_access_token(access_token, secret.get_ref(), &config.issuer)?;

    let user = db::users::find_by_id(db.get_ref(), &claims.sub)
        .await?
        .ok_or_else(|| {
            AppError::Unauthorized("Access token does not identify a user".to_string())
        })?;

    let user_claims = db::users::claims_for(db.get_ref(), &user.id).await?;

    let mut body = Map::new();
    body.insert("sub".to_string(), Value::String(user.id));
    for claim in user_claims {
        body.insert(claim.claim_type, Value::String(claim.claim_value));
    }

    Ok(HttpResponse::Ok().json(Value::Object(body)))
}

/// Extract the bearer token from the Authorization header.
fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
}

/// OAuth2 JSON error response. invalid_client maps to 401, everything
/// else the caller can fix maps to 400.
fn token_error_response(err: &TokenError) -> HttpResponse {
    let body = json!({
        "error": err.error_code(),
        "error_description": err.to_string(),
    });

    match err {
        TokenError::InvalidClient => HttpResponse::Unauthorized().json(body),
        TokenError::Internal(detail) => {
            tracing::error!("token endpoint failure: {}", detail);
            HttpResponse::InternalServerError().json(json!({
                "error": "server_error",
                "error_description": "An internal error occurred",
            }))
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}
