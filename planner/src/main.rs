mod api;
mod config;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use crate::api::AppState;
use crate::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::from_env();
    let state = AppState::from_config(&config).map_err(|e| {
        log::error!("EcoRoute planner failed to start: {e}");
        std::io::Error::other(e.to_string())
    })?;
    let state = web::Data::new(state);

    log::info!(
        "EcoRoute planner starting on {}:{} ({:?})",
        config.host,
        config.port,
        config.platform
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
