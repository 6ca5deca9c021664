//! Utilities, middleware and helpers shared by Axum-based services.
//!
//! - **[`auth`]**: stateless JWT bearer token issuance and verification
//! - **[`server`]**: server setup, health checks, graceful shutdown
//! - **[`errors`]**: structured error responses
//! - **[`extractors`]**: custom extractors (UUID path, validated JSON)

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod server;

pub use auth::{AuthError, JwtAuth, JwtClaims, JwtConfig};

pub use server::{
    create_app, create_production_app, create_router, health_router, run_health_checks,
    shutdown_signal, HealthCheckFuture, HealthResponse, ShutdownCoordinator,
};

pub use errors::{AppError, ErrorResponse};

pub use extractors::{UuidPath, ValidatedJson};
