//! Database module providing connection management and queries.

pub mod api_resources;
pub mod api_scopes;
pub mod clients;
pub mod coffees;
pub mod identity_resources;
pub mod users;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::error::{AppError, AppResult};

/// Open a connection pool to the shared PostgreSQL database.
pub async fn connect(database_url: &str) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(10)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))
}

/// Join values into the space-separated wire form used for stored lists.
pub(crate) fn join_spaced(values: &[String]) -> String {
    values.join(" ")
}

/// Split a stored space-separated list back into values.
pub(crate) fn split_spaced(stored: &str) -> Vec<String> {
    stored.split_whitespace().map(|s| s.to_string()).collect()
}
