//! Database operations for clients.

use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::auth::hash_client_secret;
use crate::error::AppResult;
use crate::models::client::{Client, ClientSeed};

/// Check whether the clients table contains any row at all.
pub async fn has_any(db: &DatabaseConnection) -> AppResult<bool> {
    let row = crate::entity::client::Entity::find().one(db).await?;
    Ok(row.is_some())
}

/// Insert a batch of seed clients as a single statement.
///
/// Shared secrets are hashed before they touch storage. Returns the
/// number of rows written.
pub async fn insert_batch(db: &DatabaseConnection, clients: &[ClientSeed]) -> AppResult<u64> {
    if clients.is_empty() {
        return Ok(0);
    }

    let now = Utc::now();
    let models: Vec<crate::entity::client::ActiveModel> = clients
        .iter()
        .map(|c| crate::entity::client::ActiveModel {
            id: Set(Uuid::new_v4()),
            client_id: Set(c.client_id.clone()),
            client_name: Set(c.client_name.clone()),
            secret_hash: Set(c.secret.as_deref().map(hash_client_secret)),
            allowed_grant_types: Set(super::join_spaced(&c.allowed_grant_types)),
            allowed_scopes: Set(super::join_spaced(&c.allowed_scopes)),
            redirect_uris: Set(super::join_spaced(&c.redirect_uris)),
            created_at: Set(now),
        })
        .collect();

    let inserted = crate::entity::client::Entity::insert_many(models)
        .exec_without_returning(db)
        .await?;

    Ok(inserted)
}

/// Find a client by its client identifier.
pub async fn find_by_client_id(
    db: &DatabaseConnection,
    client_id: &str,
) -> AppResult<Option<Client>> {
    let result = crate::entity::client::Entity::find()
        .filter(crate::entity::client::Column::ClientId.eq(client_id))
        .one(db)
        .await?;

    Ok(result.map(model_to_client))
}

fn model_to_client(m: crate::entity::client::Model) -> Client {
    Client {
        id: m.id.to_string(),
        client_id: m.client_id,
        client_name: m.client_name,
        secret_hash: m.secret_hash,
        allowed_grant_types: super::split_spaced(&m.allowed_grant_types),
        allowed_scopes: super::split_spaced(&m.allowed_scopes),
        redirect_uris: super::split_spaced(&m.redirect_uris),
    }
}
