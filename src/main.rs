use std::process;

use dotenvy::dotenv;
use leaddb::models::config::load_server_config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
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

    leaddb::run(server_config).await
}
