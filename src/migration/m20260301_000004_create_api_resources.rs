//! Migration: Create api_resources and api_resource_scopes tables.
//!
//! The scope_name foreign key requires api_scopes rows to exist before an
//! API resource can reference them, which pins the seeding order.

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
                CREATE TABLE api_resources (
                    id UUID PRIMARY KEY,
                    name VARCHAR(200) NOT NULL,
                    display_name VARCHAR(255) NOT NULL,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE UNIQUE INDEX idx_api_resources_name ON api_resources(name);

                CREATE TABLE api_resource_scopes (
                    id UUID PRIMARY KEY,
                    api_resource_id UUID NOT NULL
                        REFERENCES api_resources(id) ON DELETE CASCADE,
                    scope_name VARCHAR(200) NOT NULL
                        REFERENCES api_scopes(name),

                    UNIQUE (api_resource_id, scope_name)
                );

                CREATE INDEX idx_api_resource_scopes_scope_name
                    ON api_resource_scopes(scope_name);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TABLE IF EXISTS api_resource_scopes CASCADE;
                DROP TABLE IF EXISTS api_resources CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
