//! PostgreSQL fixtures for integration tests.
//!
//! Tests run only when `TEST_DATABASE_URL` points at an empty database. Every
//! pooled connection is wrapped in a test transaction that is never committed.

#![allow(dead_code)]

use std::sync::OnceLock;

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use leaddb::db::{DbPool, run_migrations};
use leaddb::repository::DieselRepository;

#[derive(Debug)]
struct TestCustomizer;

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for TestCustomizer {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        conn.begin_test_transaction()
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

fn migrate(database_url: &str) {
    static MIGRATED: OnceLock<()> = OnceLock::new();
    MIGRATED.get_or_init(|| {
        let mut conn = PgConnection::establish(database_url).expect("connect to test database");
        run_migrations(&mut conn).expect("run migrations");
    });
}

pub struct TestDb {
    pool: DbPool,
}

impl TestDb {
    /// `None` when no test database is configured.
    pub fn new() -> Option<Self> {
        let database_url = std::env::var("TEST_DATABASE_URL").ok()?;
        migrate(&database_url);

        // One connection so every query shares the rolled-back transaction.
        let pool = Pool::builder()
            .max_size(1)
            .connection_customizer(Box::new(TestCustomizer))
            .build(ConnectionManager::<PgConnection>::new(database_url))
            .expect("build test pool");

        Some(Self { pool })
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

/// Skips the current test when no database is configured.
macro_rules! test_db {
    () => {
        match common::TestDb::new() {
            Some(db) => db,
            None => {
                eprintln!("TEST_DATABASE_URL not set, skipping");
                return;
            }
        }
    };
}
