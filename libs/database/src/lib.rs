//! PostgreSQL connection management built on SeaORM.
//!
//! Provides configuration, connection with retry, migration running and
//! health checks shared by the API binary and integration tests.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{connect_from_config_with_retry, run_migrations, PostgresConfig};
//!
//! let config = PostgresConfig::from_env()?;
//! let db = connect_from_config_with_retry(config, None).await?;
//! run_migrations::<migration::Migrator>(&db, "booktrade_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
