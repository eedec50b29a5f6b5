//! Database operations for the coffee catalog.

use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::coffee::Coffee;

/// List all coffees, newest first.
pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<Coffee>> {
    let results = crate::entity::coffee::Entity::find()
        .order_by_desc(crate::entity::coffee::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(results.into_iter().map(model_to_coffee).collect())
}

/// Find a coffee by id.
pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> AppResult<Option<Coffee>> {
    let uuid = match Uuid::parse_str(id).ok() {
        Some(u) => u,
        None => return Ok(None),
    };

    let result = crate::entity::coffee::Entity::find_by_id(uuid).one(db).await?;

    Ok(result.map(model_to_coffee))
}

/// Insert a new coffee.
pub async fn insert(
    db: &DatabaseConnection,
    name: &str,
    description: Option<&str>,
    roast: &str,
    price_cents: i64,
) -> AppResult<Coffee> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let model = crate::entity::coffee::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        description: Set(description.map(|s| s.to_string())),
        roast: Set(roast.to_string()),
        price_cents: Set(price_cents),
        created_at: Set(now),
        updated_at: Set(now),
    };

    crate::entity::coffee::Entity::insert(model)
        .exec_without_returning(db)
        .await?;

    Ok(Coffee {
        id: id.to_string(),
        name: name.to_string(),
        description: description.map(|s| s.to_string()),
        roast: roast.to_string(),
        price_cents,
        created_at: now,
        updated_at: now,
    })
}

/// Update a coffee. Returns the updated row, or None if it does not exist.
pub async fn update(
    db: &DatabaseConnection,
    id: &str,
    name: Option<&str>,
    description: Option<&str>,
    roast: Option<&str>,
    price_cents: Option<i64>,
) -> AppResult<Option<Coffee>> {
    let uuid = match Uuid::parse_str(id).ok() {
        Some(u) => u,
        None => return Ok(None),
    };

    let model = crate::entity::coffee::Entity::find_by_id(uuid).one(db).await?;

    if let Some(m) = model {
        let mut active: crate::entity::coffee::ActiveModel = m.into();
        if let Some(n) = name {
            active.name = Set(n.to_string());
        }
        if let Some(d) = description {
            active.description = Set(Some(d.to_string()));
        }
        if let Some(r) = roast {
            active.roast = Set(r.to_string());
        }
        if let Some(p) = price_cents {
            active.price_cents = Set(p);
        }
        active.updated_at = Set(Utc::now());
        let updated = active.update(db).await?;
        Ok(Some(model_to_coffee(updated)))
    } else {
        Ok(None)
    }
}

/// Delete a coffee. Returns true when a row was removed.
pub async fn delete(db: &DatabaseConnection, id: &str) -> AppResult<bool> {
    let uuid = match Uuid::parse_str(id).ok() {
        Some(u) => u,
        None => return Ok(false),
    };

    let result = crate::entity::coffee::Entity::delete_by_id(uuid).exec(db).await?;

    Ok(result.rows_affected > 0)
}

fn model_to_coffee(m: crate::entity::coffee::Model) -> Coffee {
    Coffee {
        id: m.id.to_string(),
        name: m.name,
        description: m.description,
        roast: m.roast,
        price_cents: m.price_cents,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}
