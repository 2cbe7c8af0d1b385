//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
}

/// Create a PostgreSQL connection pool and open the first connection.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;
    tracing::debug!(?config, "connecting to database");
    pool_options(config).connect_with(options).await
}

/// Create a pool that connects on first use.
///
/// Lets the server come up before the database does; requests made while
/// the database is unreachable fail individually instead.
pub fn create_lazy_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;
    Ok(pool_options(config).connect_lazy_with(options))
}
