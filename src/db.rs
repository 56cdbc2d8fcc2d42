//! Database connection helpers.
//!
//! This module provides a small wrapper around the Diesel connection pool and
//! utilities to establish a connection to the PostgreSQL database and bring its
//! schema up to date.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::{error, info};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(Debug)]
/// Options that are applied each time a connection is acquired from the pool.
pub struct ConnectionOptions {
    /// Abort statements that run longer than this.
    pub statement_timeout: Option<Duration>,
    /// Reported in `pg_stat_activity`.
    pub application_name: &'static str,
}

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        (|| {
            conn.batch_execute(&format!(
                "SET application_name = '{}';",
                self.application_name
            ))?;
            if let Some(d) = self.statement_timeout {
                conn.batch_execute(&format!("SET statement_timeout = {};", d.as_millis()))?;
            }
            Ok(())
        })()
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a Diesel connection pool for the given database URL.
pub fn establish_connection_pool(database_url: &str, max_size: u32) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size.max(1))
        .connection_customizer(Box::new(ConnectionOptions {
            statement_timeout: Some(Duration::from_secs(30)),
            application_name: "leaddb",
        }))
        .build(manager)
}

/// Retrieve a connection from the pool
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    match pool.get() {
        Ok(conn) => Ok(conn),
        Err(e) => {
            error!("Failed to get connection from pool: {e}");
            Err(e)
        }
    }
}

/// Applies any embedded migrations that have not run yet.
pub fn run_migrations(conn: &mut PgConnection) -> diesel::migration::Result<()> {
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    for version in applied {
        info!("Applied migration {version}");
    }
    Ok(())
}
