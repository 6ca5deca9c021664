//! Stateless JWT bearer token authentication.

pub mod config;
pub mod jwt;

pub use config::JwtConfig;
pub use jwt::{AuthError, JwtAuth, JwtClaims};
