use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;

use pushkind_tenders::models::config::ServerConfig;
use pushkind_tenders::repository::InMemoryRepository;
use pushkind_tenders::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let repo = if server_config.seed_fixtures {
        match InMemoryRepository::seeded(server_config.latency()) {
            Ok(repo) => repo,
            Err(e) => {
                log::error!("Failed to load demo data: {e}");
                std::process::exit(1);
            }
        }
    } else {
        InMemoryRepository::new(server_config.latency())
    };

    let secret_key = server_config.session_key();
    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting tender console on {}:{}",
        bind_address.0,
        bind_address.1
    );

    let repo = web::Data::new(repo);
    let server_config = web::Data::new(server_config);

    HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .wrap(Logger::default())
            .app_data(repo.clone())
            .app_data(server_config.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
