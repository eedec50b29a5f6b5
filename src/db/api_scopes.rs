//! Database operations for API scopes.

use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::resource::ApiScope;

/// Check whether the api_scopes table contains any row.
pub async fn has_any(db: &DatabaseConnection) -> AppResult<bool> {
    let row = crate::entity::api_scope::Entity::find().one(db).await?;
    Ok(row.is_some())
}

/// Insert a batch of API scopes as a single statement.
pub async fn insert_batch(db: &DatabaseConnection, scopes: &[ApiScope]) -> AppResult<u64> {
    if scopes.is_empty() {
        return Ok(0);
    }

    let now = Utc::now();
    let models: Vec<crate::entity::api_scope::ActiveModel> = scopes
        .iter()
        .map(|s| crate::entity::api_scope::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(s.name.clone()),
            display_name: Set(s.display_name.clone()),
            created_at: Set(now),
        })
        .collect();

    let inserted = crate::entity::api_scope::Entity::insert_many(models)
        .exec_without_returning(db)
        .await?;

    Ok(inserted)
}

/// List all API scope names.
pub async fn list_names(db: &DatabaseConnection) -> AppResult<Vec<String>> {
    let results = crate::entity::api_scope::Entity::find()
        .order_by_asc(crate::entity::api_scope::Column::Name)
        .all(db)
        .await?;

    Ok(results.into_iter().map(|m| m.name).collect())
}
