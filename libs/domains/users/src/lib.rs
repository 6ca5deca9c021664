//! Users Domain
//!
//! User registration with an embedded address, lookups, listing and
//! email/password authentication.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (users + auth)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← uniqueness checks, hashing, CEP lookup, auth
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← data access (trait + in-memory + Postgres)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_addresses::{CepConfig, ViaCepClient};
//! use domain_users::{handlers, repository::InMemoryUserRepository, service::UserService};
//!
//! let repository = InMemoryUserRepository::new();
//! let cep = ViaCepClient::new(&CepConfig::default()).unwrap();
//! let service = UserService::new(repository, cep);
//!
//! let router = handlers::router(service);
//! ```

pub mod auth_handlers;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{UniqueField, UserError, UserResult};
pub use models::{LoginRequest, RegisterUser, TokenResponse, User, UserFilter, UserPublic};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
