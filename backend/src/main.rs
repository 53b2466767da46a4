mod config;
mod db;
mod scorer;
mod seed;
mod services;

use crate::config::Config;
use crate::db::Database;
use crate::scorer::Sentiment;
use actix_cors::Cors;
use actix_web::middleware::{self, NormalizePath};
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::io;

/// Any origin, method and header, including preflight `OPTIONS` requests.
fn cors() -> Cors {
    Cors::permissive()
}

/// `/api/dealers/` is served like `/api/dealers`.
fn normalize_path() -> NormalizePath {
    NormalizePath::trim()
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // One connection for the whole process, shared by every worker.
    let db = Database::new(&config.database_url).map_err(io::Error::other)?;
    db.create_schema().await.map_err(io::Error::other)?;
    info!("Dealer store opened at {}", config.database_url);

    if let Err(e) = seed::reseed(&db).await {
        error!("Error adding sample data: {}", e);
    }

    let scorer = Sentiment::new().map_err(io::Error::other)?;
    info!("Sentiment lexicon loaded ({} words)", scorer.word_count());

    let db = web::Data::new(db);
    let scorer = web::Data::new(scorer);

    info!("Server is running on {}", config.url());

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(middleware::Logger::default())
            .wrap(normalize_path())
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(db.clone())
            .app_data(scorer.clone())
            .service(services::dealers::configure_routes())
            .service(services::sentiment::configure_routes())
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
