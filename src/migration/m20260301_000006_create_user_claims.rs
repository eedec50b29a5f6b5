//! Migration: Create user_claims table.

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
                CREATE TABLE user_claims (
                    id UUID PRIMARY KEY,
                    user_id UUID NOT NULL
                        REFERENCES users(id) ON DELETE CASCADE,
                    claim_type VARCHAR(100) NOT NULL,
                    claim_value VARCHAR(500) NOT NULL
                );

                CREATE INDEX idx_user_claims_user_id ON user_claims(user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS user_claims CASCADE;")
            .await?;

        Ok(())
    }
}
