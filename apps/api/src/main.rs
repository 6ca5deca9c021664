//! Book Trade API - user registration and authentication server

use axum_helpers::server::{create_production_app, health_router};
use axum_helpers::JwtAuth;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_addresses::ViaCepClient;
use domain_users::{PgUserRepository, UserService};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await?;

    database::postgres::run_migrations::<Migrator>(&db, config.app.name).await?;

    let repository = PgUserRepository::new(db.clone());
    let cep_client =
        ViaCepClient::new(&config.cep).map_err(|e| eyre::eyre!("CEP client setup failed: {e}"))?;
    let service = UserService::new(repository, cep_client);
    let jwt = JwtAuth::new(&config.jwt);

    let api_routes = api::routes(service, jwt);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(config.app.clone()))
        .merge(api::health::router(db.clone()));

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing database connections");
        if let Err(e) = db.close().await {
            tracing::warn!("Failed to close database connection: {e}");
        } else {
            info!("Database connection closed");
        }
    })
    .await?;

    info!("Book Trade API shutdown complete");
    Ok(())
}
