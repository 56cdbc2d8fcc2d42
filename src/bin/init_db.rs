//! Applies migrations and loads sample data into an empty database.

use std::process;

use dotenvy::dotenv;
use leaddb::db::{establish_connection_pool, get_connection, run_migrations};
use leaddb::models::config::load_server_config;
use leaddb::repository::DieselRepository;
use leaddb::seed::seed_sample_data;

fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server_config = match load_server_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to load server config: {err}");
            process::exit(1);
        }
    };
    if let Err(err) = server_config.validate() {
        log::error!("Invalid server config: {err}");
        process::exit(1);
    }

    let pool = match establish_connection_pool(&server_config.database_url, 1) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            process::exit(1);
        }
    };

    let migrated = get_connection(&pool)
        .map_err(|err| err.to_string())
        .and_then(|mut conn| run_migrations(&mut conn).map_err(|err| err.to_string()));
    if let Err(err) = migrated {
        log::error!("Failed to run migrations: {err}");
        process::exit(1);
    }
    log::info!("Database schema is up to date");

    let repo = DieselRepository::new(pool);
    match seed_sample_data(&repo) {
        Ok(Some(summary)) => log::info!(
            "Loaded {} companies, {} contacts and {} lead lists",
            summary.companies,
            summary.contacts,
            summary.lead_lists
        ),
        Ok(None) => {}
        Err(err) => {
            log::error!("Failed to load sample data: {err}");
            process::exit(1);
        }
    }
}
