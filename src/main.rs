mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use log::info;
use crate::config::Config;
use crate::db::MemStorage;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    // One store per process, shared by every worker.
    let store = web::Data::new(db::create_store(config.seed_sample_data));

    info!("Starting server at {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(handlers::employee::configure::<MemStorage>)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
