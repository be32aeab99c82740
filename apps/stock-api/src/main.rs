//! Stock API - inventory products over REST, backed by PostgreSQL

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first so configuration errors are rendered nicely
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config(config.database.clone())
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState { config, db };

    // - /api/products/...: inventory endpoints
    // - /health: liveness with app name/version
    // - /ready: PostgreSQL round-trip
    let app = create_router::<openapi::ApiDoc>(api::routes(&state), &state.config.cors)?
        .merge(health_router(state.config.app.clone()))
        .merge(api::ready_router(state.clone()));

    info!(
        "Starting {} v{} ({:?})",
        state.config.app.name, state.config.app.version, state.config.environment
    );

    let db = state.db.clone();
    create_production_app(app, &state.config.server, async move {
        info!("Shutting down: closing database connections");
        match db.close().await {
            Ok(_) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Stock API shutdown complete");
    Ok(())
}
