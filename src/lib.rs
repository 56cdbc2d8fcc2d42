//! LeadDB: a JSON API over a PostgreSQL lead database.
//!
//! With only the `data` feature the crate exposes the persistence layer
//! (`domain`, `models`, `schema`, `repository`, `db`). The `server` feature
//! adds the HTTP application.

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;
#[cfg(feature = "server")]
use crate::routes::api::StaticSite;

#[cfg(feature = "server")]
pub mod crm;
pub mod db;
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
pub mod models;
#[cfg(feature = "server")]
pub mod pagination;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
#[cfg(feature = "server")]
pub mod seed;
#[cfg(feature = "server")]
pub mod services;

/// Registers routes, middleware and shared state on an [`App`].
#[cfg(feature = "server")]
pub fn configure_app(
    cfg: &mut web::ServiceConfig,
    repo: DieselRepository,
    site: StaticSite,
) {
    cfg.app_data(web::Data::new(repo))
        .app_data(web::Data::new(site))
        .app_data(routes::json_config())
        .app_data(routes::query_config())
        .app_data(routes::path_config())
        .configure(routes::configure)
        .default_service(web::route().to(routes::api::frontend));
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let pool = db::establish_connection_pool(
        &server_config.database_url,
        server_config.database_pool_size,
    )
    .map_err(|e| std::io::Error::other(format!("Failed to establish database connection: {e}")))?;

    {
        let mut conn = db::get_connection(&pool)
            .map_err(|e| std::io::Error::other(format!("Failed to get connection: {e}")))?;
        db::run_migrations(&mut conn)
            .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;
    }

    let repo = DieselRepository::new(pool);
    let site = StaticSite::new(&server_config.static_dir);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting LeadDB ({}) on {}:{}",
        server_config.environment,
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        let repo = repo.clone();
        let site = site.clone();
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(move |cfg| configure_app(cfg, repo, site))
    })
    .bind(bind_address)?
    .run()
    .await
}
