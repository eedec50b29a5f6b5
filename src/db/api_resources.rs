//! Database operations for API resources.

use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::resource::ApiResource;

/// Check whether the api_resources table contains any row.
pub async fn has_any(db: &DatabaseConnection) -> AppResult<bool> {
    let row = crate::entity::api_resource::Entity::find().one(db).await?;
    Ok(row.is_some())
}

/// Insert a batch of API resources, then their scope references.
///
/// Resources go in first so the scope rows can carry their ids; the
/// scope_name foreign key requires the referenced api_scopes rows to
/// already exist, which the seeding order guarantees.
pub async fn insert_batch(db: &DatabaseConnection, resources: &[ApiResource]) -> AppResult<u64> {
    if resources.is_empty() {
        return Ok(0);
    }

    let now = Utc::now();
    let ids: Vec<Uuid> = resources.iter().map(|_| Uuid::new_v4()).collect();

    let models: Vec<crate::entity::api_resource::ActiveModel> = resources
        .iter()
        .zip(&ids)
        .map(|(r, id)| crate::entity::api_resource::ActiveModel {
            id: Set(*id),
            name: Set(r.name.clone()),
            display_name: Set(r.display_name.clone()),
            created_at: Set(now),
        })
        .collect();

    let inserted = crate::entity::api_resource::Entity::insert_many(models)
        .exec_without_returning(db)
        .await?;

    let scope_rows: Vec<crate::entity::api_resource_scope::ActiveModel> = resources
        .iter()
        .zip(&ids)
        .flat_map(|(r, id)| {
            r.scopes
                .iter()
                .map(|scope| crate::entity::api_resource_scope::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    api_resource_id: Set(*id),
                    scope_name: Set(scope.clone()),
                })
                .collect::<Vec<_>>()
        })
        .collect();

    if !scope_rows.is_empty() {
        crate::entity::api_resource_scope::Entity::insert_many(scope_rows)
            .exec_without_returning(db)
            .await?;
    }

    Ok(inserted)
}

/// Resolve the API resource names reachable through any of the given
/// scope names. Used as the audience of issued access tokens.
pub async fn names_for_scopes(
    db: &DatabaseConnection,
    scopes: &[&str],
) -> AppResult<Vec<String>> {
    if scopes.is_empty() {
        return Ok(Vec::new());
    }

    let scope_rows = crate::entity::api_resource_scope::Entity::find()
        .filter(
            crate::entity::api_resource_scope::Column::ScopeName
                .is_in(scopes.iter().map(|s| ToString::to_string(s))),
        )
        .all(db)
        .await?;

    if scope_rows.is_empty() {
        return Ok(Vec::new());
    }

    let resource_ids: Vec<Uuid> = scope_rows.iter().map(|r| r.api_resource_id).collect();

    let resources = crate::entity::api_resource::Entity::find()
        .filter(crate::entity::api_resource::Column::Id.is_in(resource_ids))
        .order_by_asc(crate::entity::api_resource::Column::Name)
        .all(db)
        .await?;

    let mut names: Vec<String> = resources.into_iter().map(|m| m.name).collect();
    names.dedup();
    Ok(names)
}
