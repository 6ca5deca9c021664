use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddressError {
    /// The CEP service answered but knows no such code
    #[error("CEP Code Not Found")]
    CepNotFound,

    /// The CEP service could not be reached or answered garbage
    #[error("Failed to access the CEP service")]
    CepUnavailable,

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type AddressResult<T> = Result<T, AddressError>;
