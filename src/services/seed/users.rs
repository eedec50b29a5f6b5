//! Demo user seeding.
//!
//! Gated by a username lookup: an existing user makes the whole step a
//! silent no-op. Creation and claim attachment are two separate store
//! operations with no surrounding transaction; if claim attachment
//! fails, the already-created user row stays behind. That matches the
//! original contract and is asserted by test, so do not "fix" it by
//! wrapping the two in a transaction without revisiting the contract.

use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use crate::auth::passwords;
use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::user::SeedUser;

/// Minimum accepted password length for seeded users.
const MIN_PASSWORD_LEN: usize = 8;

/// Ensure the demo user exists with its claims attached.
pub async fn seed_users(db: &DatabaseConnection, spec: &SeedUser) -> AppResult<()> {
    if db::users::find_by_username(db, &spec.username).await?.is_some() {
        debug!(username = %spec.username, "user already exists, skipping");
        return Ok(());
    }

    let failures = validate_user_spec(spec);
    if let Some(first) = failures.first() {
        return Err(AppError::Seed(first.clone()));
    }

    let password_hash = passwords::hash_password(&spec.password)?;

    let user = db::users::insert(db, &spec.username, &spec.email, true, &password_hash)
        .await
        .map_err(|e| AppError::Seed(format!("failed to create user '{}': {}", spec.username, e)))?;

    if let Err(e) = db::users::attach_claims(db, &user.id, &spec.claims).await {
        return Err(AppError::Seed(format!(
            "failed to attach claims to user '{}': {}",
            spec.username, e
        )));
    }

    info!(username = %spec.username, claims = spec.claims.len(), "seeded demo user");
    Ok(())
}

/// Validate a seed user spec, returning every failure description.
/// Callers surface the first one, mirroring how creation failures are
/// reported to the operator.
fn validate_user_spec(spec: &SeedUser) -> Vec<String> {
    let mut failures = Vec::new();

    if spec.username.trim().is_empty() {
        failures.push("Username must not be empty.".to_string());
    } else if !spec
        .username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        failures.push(format!(
            "Username '{}' contains characters outside [a-zA-Z0-9._-].",
            spec.username
        ));
    }

    if !spec.email.contains('@') {
        failures.push(format!("Email '{}' is not a valid address.", spec.email));
    }

    if spec.password.len() < MIN_PASSWORD_LEN {
        failures.push(format!(
            "Password must be at least {} characters long.",
            MIN_PASSWORD_LEN
        ));
    }

    failures
}
