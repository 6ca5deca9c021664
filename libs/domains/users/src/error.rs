use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Which uniqueness constraint a registration collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Cpf,
    Email,
    Whatsapp,
}

impl std::fmt::Display for UniqueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniqueField::Cpf => write!(f, "cpf"),
            UniqueField::Email => write!(f, "email"),
            UniqueField::Whatsapp => write!(f, "whatsapp"),
        }
    }
}

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User with this {0} already exists.")]
    AlreadyExists(UniqueField),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Users not found")]
    NoneFound,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("CEP Code Not Found")]
    CepNotFound,

    #[error("Failed to access the CEP service")]
    CepUnavailable,

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<domain_addresses::AddressError> for UserError {
    fn from(e: domain_addresses::AddressError) -> Self {
        match e {
            domain_addresses::AddressError::CepNotFound => UserError::CepNotFound,
            domain_addresses::AddressError::CepUnavailable => UserError::CepUnavailable,
            domain_addresses::AddressError::Database(e) => UserError::Transaction(e.to_string()),
        }
    }
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::AlreadyExists(field) => {
                AppError::Conflict(format!("User with this {} already exists.", field))
            }
            UserError::NotFound(_) => AppError::NotFound("User not found".to_string()),
            UserError::NoneFound => AppError::NotFound("Users not found".to_string()),
            UserError::InvalidCredentials => {
                AppError::Unauthorized("Incorrect email or password".to_string())
            }
            UserError::CepNotFound => AppError::NotFound("CEP Code Not Found".to_string()),
            UserError::CepUnavailable => {
                AppError::ServiceUnavailable("Failed to access the CEP service".to_string())
            }
            UserError::Transaction(msg) => {
                tracing::error!("Transaction error: {}", msg);
                AppError::InternalServerError("Database transaction error".to_string())
            }
            UserError::PasswordHash(msg) => {
                tracing::error!("Password hash error: {}", msg);
                AppError::InternalServerError("An internal error occurred".to_string())
            }
            UserError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
