//! SeaORM database migrations.
//!
//! Three logical stores share one physical database, each with its own
//! migrator and migration-tracking table: the identity provider's
//! configuration store, its user store, and the resource API's catalog.

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_clients;
mod m20260301_000002_create_identity_resources;
mod m20260301_000003_create_api_scopes;
mod m20260301_000004_create_api_resources;
mod m20260301_000005_create_users;
mod m20260301_000006_create_user_claims;
mod m20260301_000007_create_coffees;

/// Migrator for the identity provider's configuration store.
pub struct ConfigurationMigrator;

#[async_trait::async_trait]
impl MigratorTrait for ConfigurationMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_clients::Migration),
            Box::new(m20260301_000002_create_identity_resources::Migration),
            Box::new(m20260301_000003_create_api_scopes::Migration),
            Box::new(m20260301_000004_create_api_resources::Migration),
        ]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("configuration_migrations").into_iden()
    }
}

/// Migrator for the identity provider's user store.
pub struct IdentityMigrator;

#[async_trait::async_trait]
impl MigratorTrait for IdentityMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000005_create_users::Migration),
            Box::new(m20260301_000006_create_user_claims::Migration),
        ]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("identity_migrations").into_iden()
    }
}

/// Migrator for the resource API's coffee catalog.
pub struct CatalogMigrator;

#[async_trait::async_trait]
impl MigratorTrait for CatalogMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260301_000007_create_coffees::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("catalog_migrations").into_iden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_migrations_present_and_ordered() {
        let migrations = ConfigurationMigrator::migrations();
        assert_eq!(migrations.len(), 4);

        let names: Vec<String> = migrations.iter().map(|m| m.name().to_string()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted, "migrations must apply in name order");
    }

    #[test]
    fn test_identity_migrations_present_and_ordered() {
        let migrations = IdentityMigrator::migrations();
        assert_eq!(migrations.len(), 2);
        assert!(migrations[0].name().contains("create_users"));
        assert!(migrations[1].name().contains("create_user_claims"));
    }

    #[test]
    fn test_catalog_migrations_present() {
        assert_eq!(CatalogMigrator::migrations().len(), 1);
    }

    #[test]
    fn test_migrators_track_in_distinct_tables() {
        let tables = [
            ConfigurationMigrator::migration_table_name().to_string(),
            IdentityMigrator::migration_table_name().to_string(),
            CatalogMigrator::migration_table_name().to_string(),
        ];
        assert_eq!(
            tables.iter().collect::<std::collections::HashSet<_>>().len(),
            3
        );
    }
}
