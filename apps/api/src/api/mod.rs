//! API routes module

pub mod health;

use axum::Router;
use axum_helpers::JwtAuth;
use domain_addresses::ViaCepClient;
use domain_users::{auth_handlers, handlers, PgUserRepository, UserService};
use std::sync::Arc;

/// Create all API routes
pub fn routes(service: UserService<PgUserRepository, ViaCepClient>, jwt: JwtAuth) -> Router {
    Router::new()
        .nest("/users", handlers::router(service.clone()))
        .nest("/auth", auth_handlers::router(Arc::new(service), jwt))
}
