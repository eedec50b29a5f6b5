//! Database operations for identity resources.

use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::resource::IdentityResource;

/// Check whether the identity_resources table contains any row.
pub async fn has_any(db: &DatabaseConnection) -> AppResult<bool> {
    let row = crate::entity::identity_resource::Entity::find()
        .one(db)
        .await?;
    Ok(row.is_some())
}

/// Insert a batch of identity resources as a single statement.
pub async fn insert_batch(
    db: &DatabaseConnection,
    resources: &[IdentityResource],
) -> AppResult<u64> {
    if resources.is_empty() {
        return Ok(0);
    }

    let now = Utc::now();
    let models: Vec<crate::entity::identity_resource::ActiveModel> = resources
        .iter()
        .map(|r| crate::entity::identity_resource::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(r.name.clone()),
            display_name: Set(r.display_name.clone()),
            user_claims: Set(super::join_spaced(&r.user_claims)),
            created_at: Set(now),
        })
        .collect();

    let inserted = crate::entity::identity_resource::Entity::insert_many(models)
        .exec_without_returning(db)
        .await?;

    Ok(inserted)
}

/// List all identity resources.
pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<IdentityResource>> {
    let results = crate::entity::identity_resource::Entity::find()
        .order_by_asc(crate::entity::identity_resource::Column::Name)
        .all(db)
        .await?;

    Ok(results
        .into_iter()
        .map(|m| IdentityResource {
            name: m.name,
            display_name: m.display_name,
            user_claims: super::split_spaced(&m.user_claims),
        })
        .collect())
}
