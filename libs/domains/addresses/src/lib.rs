//! Addresses Domain
//!
//! Postal address data attached to users, resolved from a Brazilian CEP
//! code via the ViaCEP web service.
//!
//! - [`lookup`]: the `CepResolver` trait and its ViaCEP HTTP client
//! - [`repository`]: persistence helpers usable inside a transaction
//! - [`models`]: domain types and ViaCEP payloads

pub mod error;
pub mod lookup;
pub mod models;
pub mod repository;

pub use error::{AddressError, AddressResult};
pub use lookup::{CepConfig, CepResolver, ViaCepClient};
pub use models::{Address, CepAddress, NewAddress};
