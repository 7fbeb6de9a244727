use database::db::create_connection;
use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::DbErr;
use thiserror::Error;

mod app;
mod config;
mod doc;
mod dtos;
mod error;
mod extract;
mod routes;
mod state;
mod utils;

use crate::{config::Config, state::AppState, utils::shutdown::shutdown_signal};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    env_logger::init();

    let config = Config::from_env()?;
    let db = create_connection(&config.database_url, config.max_connections).await?;

    // Creates any missing tables; already-applied migrations are skipped
    Migrator::up(&db, None).await?;
    info!("Database schema is up to date");

    let app = app::router(AppState::new(db.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!("Database connections closed");

    Ok(())
}
