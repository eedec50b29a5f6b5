//! Migration: Create coffees table for the resource API catalog.

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
                CREATE TABLE coffees (
                    id UUID PRIMARY KEY,
                    name VARCHAR(200) NOT NULL,
                    description VARCHAR(1000),
                    roast VARCHAR(20) NOT NULL DEFAULT 'medium'
                        CHECK (roast IN ('light', 'medium', 'dark')),
                    price_cents BIGINT NOT NULL CHECK (price_cents >= 0),

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS coffees CASCADE;")
            .await?;

        Ok(())
    }
}
