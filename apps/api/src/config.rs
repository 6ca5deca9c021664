//! Configuration for the Book Trade API

use axum_helpers::JwtConfig;
use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;
use domain_addresses::CepConfig;

pub use core_config::Environment;

/// Application configuration, loaded once at startup
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub jwt: JwtConfig,
    pub cep: CepConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let database = PostgresConfig::from_env()?;
        let jwt = JwtConfig::from_env()?;
        let cep = CepConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            database,
            jwt,
            cep,
        })
    }
}
