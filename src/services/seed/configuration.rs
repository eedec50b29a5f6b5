//! Configuration store seeding.
//!
//! Each entity kind is seeded as one batch, gated by an existence check
//! on that kind's table: any pre-existing row suppresses the whole batch
//! for that kind. The gate makes a second run a no-op, but it also means
//! a changed seed set is silently ignored once a table has rows. That
//! is the compatibility contract, not an oversight.
//!
//! Kinds are processed clients → identity resources → API scopes → API
//! resources; API resources reference scope names by foreign key, so the
//! order is load-bearing.

use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use crate::db;
use crate::error::AppResult;
use crate::models::seed::SeedData;

/// Seed the four configuration entity kinds from the given set.
pub async fn seed_configuration(db: &DatabaseConnection, seed: &SeedData) -> AppResult<()> {
    if db::clients::has_any(db).await? {
        debug!("clients table already populated, skipping");
    } else {
        let count = db::clients::insert_batch(db, &seed.clients).await?;
        info!(count, "seeded clients");
    }

    if db::identity_resources::has_any(db).await? {
        debug!("identity_resources table already populated, skipping");
    } else {
        let count = db::identity_resources::insert_batch(db, &seed.identity_resources).await?;
        info!(count, "seeded identity resources");
    }

    if db::api_scopes::has_any(db).await? {
        debug!("api_scopes table already populated, skipping");
    } else {
        let count = db::api_scopes::insert_batch(db, &seed.api_scopes).await?;
        info!(count, "seeded API scopes");
    }

    if db::api_resources::has_any(db).await? {
        debug!("api_resources table already populated, skipping");
    } else {
        let count = db::api_resources::insert_batch(db, &seed.api_resources).await?;
        info!(count, "seeded API resources");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use crate::entity;
    use crate::models::seed::SeedData;

    fn exec_ok() -> MockExecResult {
        MockExecResult {
            rows_affected: 1,
            ..Default::default()
        }
    }

    fn stored_client() -> entity::client::Model {
        entity::client::Model {
            id: Uuid::new_v4(),
            client_id: "existing.client".to_string(),
            client_name: "Existing".to_string(),
            secret_hash: None,
            allowed_grant_types: "client_credentials".to_string(),
            allowed_scopes: "coffeeshop_api".to_string(),
            redirect_uris: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Mock an empty store: every existence probe comes back empty and
    /// every batch insert succeeds.
    fn empty_store() -> MockDatabase {
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::client::Model>::new()])
            .append_query_results([Vec::<entity::identity_resource::Model>::new()])
            .append_query_results([Vec::<entity::api_scope::Model>::new()])
            .append_query_results([Vec::<entity::api_resource::Model>::new()])
            // clients, identity resources, api scopes, api resources,
            // api resource scope rows
            .append_exec_results([exec_ok(), exec_ok(), exec_ok(), exec_ok(), exec_ok()])
    }

    #[tokio::test]
    async fn test_seeds_all_kinds_from_empty_store() {
        let db = empty_store().into_connection();

        seed_configuration(&db, &SeedData::builtin()).await.unwrap();

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains(r#"INSERT INTO "clients""#));
        assert!(log.contains(r#"INSERT INTO "identity_resources""#));
        assert!(log.contains(r#"INSERT INTO "api_scopes""#));
        assert!(log.contains(r#"INSERT INTO "api_resources""#));
        assert!(log.contains(r#"INSERT INTO "api_resource_scopes""#));
    }

    #[tokio::test]
    async fn test_scope_insert_precedes_api_resource_insert() {
        let db = empty_store().into_connection();

        seed_configuration(&db, &SeedData::builtin()).await.unwrap();

        let log = format!("{:?}", db.into_transaction_log());
        let scopes_at = log.find(r#"INSERT INTO "api_scopes""#).unwrap();
        let resources_at = log.find(r#"INSERT INTO "api_resources""#).unwrap();
        let scope_refs_at = log.find(r#"INSERT INTO "api_resource_scopes""#).unwrap();
        assert!(scopes_at < resources_at);
        assert!(resources_at < scope_refs_at);
    }

    #[tokio::test]
    async fn test_populated_client_table_suppresses_client_seeding() {
        // Clients table already has a row; the other kinds are empty.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_client()]])
            .append_query_results([Vec::<entity::identity_resource::Model>::new()])
            .append_query_results([Vec::<entity::api_scope::Model>::new()])
            .append_query_results([Vec::<entity::api_resource::Model>::new()])
            .append_exec_results([exec_ok(), exec_ok(), exec_ok(), exec_ok()])
            .into_connection();

        seed_configuration(&db, &SeedData::builtin()).await.unwrap();

        let log = format!("{:?}", db.into_transaction_log());
        assert!(
            !log.contains(r#"INSERT INTO "clients""#),
            "a populated clients table must gate out client inserts"
        );
        assert!(log.contains(r#"INSERT INTO "identity_resources""#));
    }

    #[tokio::test]
    async fn test_second_run_inserts_nothing() {
        // Everything already populated: four probes, zero inserts.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_client()]])
            .append_query_results([vec![entity::identity_resource::Model {
                id: Uuid::new_v4(),
                name: "openid".to_string(),
                display_name: "Your user identifier".to_string(),
                user_claims: "sub".to_string(),
                created_at: Utc::now(),
            }]])
            .append_query_results([vec![entity::api_scope::Model {
                id: Uuid::new_v4(),
                name: "coffeeshop_api".to_string(),
                display_name: "Coffee Shop API".to_string(),
                created_at: Utc::now(),
            }]])
            .append_query_results([vec![entity::api_resource::Model {
                id: Uuid::new_v4(),
                name: "coffeeshop".to_string(),
                display_name: "Coffee Shop".to_string(),
                created_at: Utc::now(),
            }]])
            .into_connection();

        seed_configuration(&db, &SeedData::builtin()).await.unwrap();

        let log = format!("{:?}", db.into_transaction_log());
        assert!(!log.contains("INSERT INTO"));
    }

    #[tokio::test]
    async fn test_insert_failure_aborts_remaining_kinds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::client::Model>::new()])
            .append_exec_errors([sea_orm::DbErr::Custom("clients table gone".to_string())])
            .into_connection();

        let err = seed_configuration(&db, &SeedData::builtin())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("clients table gone"));

        let log = format!("{:?}", db.into_transaction_log());
        assert!(
            !log.contains(r#""identity_resources""#),
            "later kinds must not be touched after a failure"
        );
    }
}
