//! Database operations for users and their claims.

use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::user::{User, UserClaim};

/// Find a user by username.
pub async fn find_by_username(db: &DatabaseConnection, username: &str) -> AppResult<Option<User>> {
    let result = crate::entity::user::Entity::find()
        .filter(crate::entity::user::Column::Username.eq(username))
        .one(db)
        .await?;

    Ok(result.map(model_to_user))
}

/// Find a user by id.
pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> AppResult<Option<User>> {
    let uuid = match Uuid::parse_str(id).ok() {
        Some(u) => u,
        None => return Ok(None),
    };

    let result = crate::entity::user::Entity::find_by_id(uuid).one(db).await?;

    Ok(result.map(model_to_user))
}

/// Insert a new user with a pre-hashed password credential.
pub async fn insert(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    email_confirmed: bool,
    password_hash: &str,
) -> AppResult<User> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let model = crate::entity::user::ActiveModel {
        id: Set(id),
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        email_confirmed: Set(email_confirmed),
        password_hash: Set(password_hash.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    crate::entity::user::Entity::insert(model)
        .exec_without_returning(db)
        .await?;

    Ok(User {
        id: id.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        email_confirmed,
        created_at: now,
    })
}

/// Attach a batch of claims to a user as a single statement.
pub async fn attach_claims(
    db: &DatabaseConnection,
    user_id: &str,
    claims: &[UserClaim],
) -> AppResult<u64> {
    if claims.is_empty() {
        return Ok(0);
    }

    let user_uuid = Uuid::parse_str(user_id)?;

    let models: Vec<crate::entity::user_claim::ActiveModel> = claims
        .iter()
        .map(|c| crate::entity::user_claim::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_uuid),
            claim_type: Set(c.claim_type.clone()),
            claim_value: Set(c.claim_value.clone()),
        })
        .collect();

    let inserted = crate::entity::user_claim::Entity::insert_many(models)
        .exec_without_returning(db)
        .await?;

    Ok(inserted)
}

/// Load the claims attached to a user.
pub async fn claims_for(db: &DatabaseConnection, user_id: &str) -> AppResult<Vec<UserClaim>> {
    let user_uuid = Uuid::parse_str(user_id)?;

    let results = crate::entity::user_claim::Entity::find()
        .filter(crate::entity::user_claim::Column::UserId.eq(user_uuid))
        .all(db)
        .await?;

    Ok(results
        .into_iter()
        .map(|m| UserClaim {
            claim_type: m.claim_type,
            claim_value: m.claim_value,
        })
        .collect())
}

/// Load the stored password hash for a username, for credential checks.
pub async fn password_hash_for(
    db: &DatabaseConnection,
    username: &str,
) -> AppResult<Option<(User, String)>> {
    let result = crate::entity::user::Entity::find()
        .filter(crate::entity::user::Column::Username.eq(username))
        .one(db)
        .await?;

    Ok(result.map(|m| {
        let hash = m.password_hash.clone();
        (model_to_user(m), hash)
    }))
}

fn model_to_user(m: crate::entity::user::Model) -> User {
    User {
        id: m.id.to_string(),
        username: m.username,
        email: m.email,
        email_confirmed: m.email_confirmed,
        created_at: m.created_at,
    }
}
