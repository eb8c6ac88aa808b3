use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect to the configured database and apply pending migrations when enabled.
pub async fn prepare_database(cfg: &AppConfig) -> Result<DatabaseConnection, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.database.auto_migrate {
        models::db::migrate(&db).await.map_err(|e| StartupError::Migration(e.to_string()))?;
        info!(event = "migrations_applied", "schema up to date");
    } else {
        warn!(event = "migrations_skipped", "auto_migrate disabled; expecting schema to exist");
    }
    Ok(db)
}

/// Router wired to SeaORM-backed services.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState::from_db(db), build_cors())
}

/// Public entry: load configuration and run the HTTP server until it stops.
pub async fn run() -> Result<(), StartupError> {
    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> Result<(), StartupError> {
    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))?;

    let db = prepare_database(&cfg).await?;
    let app = build_app(db);

    info!(%addr, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
