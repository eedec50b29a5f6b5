//! Bootstrap orchestration for the identity provider's stores.
//!
//! Runs only when the operator passes `--seed` at startup: applies the
//! pending configuration-store migrations, seeds the configuration
//! entities, applies the identity-store migrations, and seeds the demo
//! user, strictly in that order, each step awaited to completion. Any
//! failure aborts the bootstrap; the caller must not start serving on a
//! partially migrated or seeded store.

pub mod configuration;
pub mod users;

pub use configuration::seed_configuration;
pub use users::seed_users;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::error::AppResult;
use crate::migration::{ConfigurationMigrator, IdentityMigrator};
use crate::models::seed::SeedData;

/// Run the full bootstrap sequence against the shared database.
pub async fn ensure_seed_data(db: &DatabaseConnection, seed: &SeedData) -> AppResult<()> {
    info!("Applying configuration store migrations");
    ConfigurationMigrator::up(db, None).await?;

    seed_configuration(db, seed).await?;

    info!("Applying identity store migrations");
    IdentityMigrator::up(db, None).await?;

    seed_users(db, &seed.demo_user).await?;

    Ok(())
}
