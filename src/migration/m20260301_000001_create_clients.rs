//! Migration: Create clients table.
//!
//! Registered relying parties permitted to request tokens.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE clients (
                    id UUID PRIMARY KEY,
                    client_id VARCHAR(200) NOT NULL,
                    client_name VARCHAR(255) NOT NULL,
                    secret_hash VARCHAR(64),
                    allowed_grant_types TEXT NOT NULL,
                    allowed_scopes TEXT NOT NULL,
                    redirect_uris TEXT NOT NULL,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE UNIQUE INDEX idx_clients_client_id ON clients(client_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS clients CASCADE;")
            .await?;

        Ok(())
    }
}
