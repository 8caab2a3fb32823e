use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    middleware::{Logger, NormalizePath},
    web, App, HttpServer,
};
use clap::Parser;

use crate::{
    config::Config,
    db::{BlueprintStore, InMemoryStore},
};

mod config;
mod db;
mod models;
mod routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::parse();

    let store: Arc<dyn BlueprintStore> = if config.seed {
        Arc::new(InMemoryStore::seeded())
    } else {
        Arc::new(InMemoryStore::new())
    };
    log::info!("store ready with {} blueprints", store.get_all().len());

    let store = web::Data::from(store);

    log::info!("listening on {}:{}", config.address, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .wrap(Cors::permissive())
            .app_data(store.clone())
            .configure(routes::config)
    })
    .bind((config.address.as_str(), config.port))?
    .run()
    .await?;

    log::info!("bye!");
    Ok(())
}
