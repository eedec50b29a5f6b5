//! Migration: Create identity_resources table.
//!
//! Named bundles of user claims releasable under a scope (e.g. "profile").

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
                CREATE TABLE identity_resources (
                    id UUID PRIMARY KEY,
                    name VARCHAR(200) NOT NULL,
                    display_name VARCHAR(255) NOT NULL,
                    user_claims TEXT NOT NULL,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE UNIQUE INDEX idx_identity_resources_name ON identity_resources(name);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS identity_resources CASCADE;")
            .await?;

        Ok(())
    }
}
